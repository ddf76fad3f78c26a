use std::io::Write;
use std::path::Path;

use anyhow::Result;
use blockcheck::{BlockcheckError, Config, ReferenceStatus};

use crate::cli::ColorWhen;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;

pub fn cmd_verify(
    source: Option<&Path>,
    assets: Option<&Path>,
    config_path: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let (config, warnings, config_file) = Config::resolve(&project_root, config_path)?;
    let ui = UiContext::new(json, verbose, color, &config);

    let source = source.unwrap_or(config.paths.source.as_path());
    let assets = assets.unwrap_or(config.paths.assets.as_path());

    if let Some(file) = &config_file {
        crate::ui::output::print_config_warnings(file, &warnings);
        if !ui.json && ui.caps.is_github_actions {
            for w in &warnings {
                println!(
                    "{}",
                    github_actions_annotation(
                        AnnotationLevel::Warning,
                        &format!("unknown config key '{}'", w.key),
                        Some(&file.display().to_string()),
                        Some("Unknown config key"),
                    )
                );
            }
        }
    }

    if ui.verbose > 0 && !ui.json {
        crate::ui::output::print_resolved_paths(source, assets, config_file.as_deref());
    }

    let mut out = std::io::stdout().lock();

    if ui.json {
        let _ = crate::ui::json::write_event(&mut out, &crate::ui::json::start_event(source, assets));
    }

    let result = blockcheck::verify_imports_with_callback(source, assets, |reference| {
        if ui.json {
            let _ = crate::ui::json::write_event(
                &mut out,
                &crate::ui::json::reference_event(reference),
            );
        } else if reference.status == ReferenceStatus::Verified {
            let _ = out.write_all(
                crate::ui::views::verify::render_verified_line(&reference.filename, ui.color)
                    .as_bytes(),
            );
        }
    });

    let report = match result {
        Ok(report) => report,
        Err(BlockcheckError::MissingSourceFile { path }) => {
            if ui.json {
                let _ = crate::ui::json::write_event(
                    &mut out,
                    &crate::ui::json::error_event(
                        "missing_source_file",
                        &path,
                        &format!("{} does not exist.", path.display()),
                    ),
                );
            } else {
                let _ = out.write_all(
                    crate::ui::views::verify::render_missing_source(&path, ui.color).as_bytes(),
                );
            }
            let _ = out.flush();
            std::process::exit(1);
        }
        Err(err @ BlockcheckError::SourceUnreadable { .. }) if ui.json => {
            let _ = crate::ui::json::write_event(
                &mut out,
                &crate::ui::json::error_event("source_unreadable", source, &err.to_string()),
            );
            let _ = out.flush();
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    if ui.json {
        let _ = crate::ui::json::write_event(&mut out, &crate::ui::json::complete_event(&report));
    } else {
        let _ = out.write_all(
            crate::ui::views::verify::render_verify_summary(&report, ui.color).as_bytes(),
        );

        if ui.caps.is_github_actions {
            let file = source.display().to_string();
            for filename in report.missing() {
                let _ = writeln!(
                    out,
                    "{}",
                    github_actions_annotation(
                        AnnotationLevel::Error,
                        filename,
                        Some(&file),
                        Some("Missing texture"),
                    )
                );
            }
        }

        if ui.verbose > 0 {
            eprint!(
                "{}",
                crate::ui::views::verify::render_verbose_counts(&report, ui.color)
            );
        }
    }

    let _ = out.flush();

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
