use brain_core::{AppConfig, BrainError, BrainResult};
use std::process::{Command, Stdio};

fn default_opener() -> (String, Vec<String>) {
    if cfg!(target_os = "windows") {
        (
            "cmd".to_string(),
            vec!["/C".to_string(), "start".to_string(), String::new()],
        )
    } else if cfg!(target_os = "macos") {
        ("open".to_string(), Vec::new())
    } else {
        ("xdg-open".to_string(), Vec::new())
    }
}

/// Program and leading arguments used to open a url.
pub fn opener_for(config: &AppConfig) -> (String, Vec<String>) {
    match config.open_command.as_deref().map(str::trim) {
        Some(command) if !command.is_empty() => {
            let mut parts = command.split_whitespace().map(str::to_string);
            let program = parts.next().unwrap_or_default();
            (program, parts.collect())
        }
        _ => default_opener(),
    }
}

/// Launches the opener for `url` without waiting on it.
pub fn open_url(url: &str, config: &AppConfig) -> BrainResult<()> {
    let (program, args) = opener_for(config);

    let mut child = Command::new(&program)
        .args(&args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| BrainError::Share(format!("failed to launch '{}': {}", program, e)))?;

    std::thread::spawn(move || {
        let _ = child.wait();
    });

    tracing::info!("Opened {} with {}", url, program);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_opener_splits_arguments() {
        let config = AppConfig {
            open_command: Some("firefox --new-tab".to_string()),
            ..Default::default()
        };
        let (program, args) = opener_for(&config);
        assert_eq!(program, "firefox");
        assert_eq!(args, vec!["--new-tab"]);
    }

    #[test]
    fn test_blank_opener_uses_platform_default() {
        let config = AppConfig {
            open_command: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(opener_for(&config), default_opener());
    }
}
