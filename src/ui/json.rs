use std::io::{self, Write};

use blockcheck::{Reference, VerifyReport};
use serde_json::json;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn start_event(source: &std::path::Path, assets: &std::path::Path) -> serde_json::Value {
    json!({
        "event": "start",
        "command": "verify",
        "source": source.display().to_string(),
        "assets": assets.display().to_string(),
    })
}

pub fn reference_event(reference: &Reference) -> serde_json::Value {
    json!({
        "event": "reference",
        "filename": reference.filename,
        "status": reference.status.as_str(),
    })
}

pub fn complete_event(report: &VerifyReport) -> serde_json::Value {
    json!({
        "event": "complete",
        "command": "verify",
        "verified": report.verified_count(),
        "missing": report.missing().collect::<Vec<_>>(),
        "success": report.is_success(),
    })
}

pub fn error_event(kind: &str, path: &std::path::Path, message: &str) -> serde_json::Value {
    json!({
        "event": "error",
        "kind": kind,
        "path": path.display().to_string(),
        "message": message,
    })
}
