use std::path::Path;

use blockcheck::VerifyReport;

use crate::ui::theme::{colors, paint};

pub fn render_verified_line(filename: &str, supports_color: bool) -> String {
    let line = format!("Verified: {} exists.", filename);
    format!("{}\n", paint(&line, colors::SUCCESS, supports_color))
}

/// Closing block: a blank line, then either the Missing Set or the success line.
pub fn render_verify_summary(report: &VerifyReport, supports_color: bool) -> String {
    let mut out = String::from("\n");

    if report.is_success() {
        out.push_str(&paint(
            "All imported block textures exist.",
            colors::SUCCESS,
            supports_color,
        ));
        out.push('\n');
        return out;
    }

    out.push_str(&paint("Missing files:", colors::ERROR, supports_color));
    out.push('\n');
    for filename in report.missing() {
        let line = format!(" - {}", filename);
        out.push_str(&paint(&line, colors::ERROR, supports_color));
        out.push('\n');
    }
    out
}

/// Full text report, as printed over a run.
pub fn render_verify_report(report: &VerifyReport, supports_color: bool) -> String {
    let mut out = String::new();
    for filename in report.verified() {
        out.push_str(&render_verified_line(filename, supports_color));
    }
    out.push_str(&render_verify_summary(report, supports_color));
    out
}

pub fn render_missing_source(path: &Path, supports_color: bool) -> String {
    let line = format!("Error: {} does not exist.", path.display());
    format!("{}\n", paint(&line, colors::ERROR, supports_color))
}

pub fn render_verbose_counts(report: &VerifyReport, supports_color: bool) -> String {
    let line = format!(
        "{} reference(s): {} verified, {} missing",
        report.len(),
        report.verified_count(),
        report.missing_count()
    );
    format!("{}\n", paint(&line, colors::DIM, supports_color))
}
