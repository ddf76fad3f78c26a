use std::path::Path;

use blockcheck::ConfigWarning;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("Warning: unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("Warning: unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

pub fn print_resolved_paths(source: &Path, assets: &Path, config_file: Option<&Path>) {
    match config_file {
        Some(path) => eprintln!("Config: {}", path.display()),
        None => eprintln!("Config: (defaults)"),
    }
    eprintln!("Source: {}", source.display());
    eprintln!("Assets: {}", assets.display());
}
