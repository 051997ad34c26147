//! Share dispatch: a native share command when one is available, otherwise
//! the system clipboard.
//!
//! Both paths are fire-and-forget. Failures are logged and never reported
//! back to the user.

use crate::clipboard::copy_to_clipboard;
use brain_core::{AppConfig, BrainError, BrainResult};
use brain_domain::ShareRequest;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

pub const SHARE_TITLE_ENV: &str = "BRAIN_SHARE_TITLE";
pub const SHARE_URL_ENV: &str = "BRAIN_SHARE_URL";
pub const SHARE_TEXT_ENV: &str = "BRAIN_SHARE_TEXT";

pub trait ShareTarget {
    fn name(&self) -> &str;

    /// Whether the capability exists in this environment.
    fn is_available(&self) -> bool;

    fn share(&self, request: &ShareRequest) -> BrainResult<()>;
}

/// Which strategy handled a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Native,
    Clipboard,
}

/// Native share capability backed by an external command.
///
/// The command receives the plain text on stdin. The structured fields are
/// passed in [`SHARE_TITLE_ENV`], [`SHARE_TEXT_ENV`] and [`SHARE_URL_ENV`];
/// the url is empty when there is none.
#[derive(Debug, Clone)]
pub struct CommandShare {
    program: String,
    args: Vec<String>,
}

impl CommandShare {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &AppConfig) -> Option<Self> {
        config
            .share_command()
            .map(|program| Self::new(program, config.share.args.clone()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Resolves `program` the way a shell would: paths are checked directly,
/// bare names are searched on `PATH`.
pub fn program_exists(program: &str) -> bool {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return path.is_file();
    }

    std::env::var_os("PATH")
        .map(|paths| {
            std::env::split_paths(&paths).any(|dir| {
                let candidate = dir.join(program);
                candidate.is_file() || (cfg!(windows) && candidate.with_extension("exe").is_file())
            })
        })
        .unwrap_or(false)
}

impl ShareTarget for CommandShare {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        program_exists(&self.program)
    }

    fn share(&self, request: &ShareRequest) -> BrainResult<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(SHARE_TITLE_ENV, &request.title)
            .env(SHARE_TEXT_ENV, &request.text)
            .env(SHARE_URL_ENV, request.url.as_deref().unwrap_or(""))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| BrainError::Share(format!("failed to launch '{}': {}", self.program, e)))?;

        let stdin = child.stdin.take();
        let text = request.plain_text.clone();
        let program = self.program.clone();

        std::thread::spawn(move || {
            if let Some(mut stdin) = stdin {
                if let Err(e) = stdin.write_all(text.as_bytes()) {
                    tracing::warn!("Share command '{}' did not accept input: {}", program, e);
                }
            }
            match child.wait() {
                Ok(status) if !status.success() => {
                    tracing::warn!("Share command '{}' exited with {}", program, status);
                }
                Err(e) => tracing::warn!("Share command '{}' failed: {}", program, e),
                _ => {}
            }
        });

        Ok(())
    }
}

/// Clipboard fallback. Always considered available; a failed write is only
/// detected when it happens.
#[derive(Debug, Clone, Default)]
pub struct ClipboardShare;

impl ShareTarget for ClipboardShare {
    fn name(&self) -> &str {
        "clipboard"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn share(&self, request: &ShareRequest) -> BrainResult<()> {
        copy_to_clipboard(&request.plain_text)
    }
}

pub struct ShareDispatcher {
    native: Option<Box<dyn ShareTarget>>,
    fallback: Box<dyn ShareTarget>,
}

impl ShareDispatcher {
    pub fn new(native: Option<Box<dyn ShareTarget>>, fallback: Box<dyn ShareTarget>) -> Self {
        Self { native, fallback }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let native = CommandShare::from_config(config)
            .map(|command| Box::new(command) as Box<dyn ShareTarget>);
        Self::new(native, Box::new(ClipboardShare))
    }

    pub fn has_native(&self) -> bool {
        self.native
            .as_ref()
            .is_some_and(|target| target.is_available())
    }

    /// Tries the native capability, else the fallback. Errors from either
    /// target are logged and swallowed.
    pub fn dispatch(&self, request: &ShareRequest) -> ShareOutcome {
        if let Some(native) = self.native.as_ref().filter(|t| t.is_available()) {
            tracing::debug!("Sharing '{}' via {}", request.title, native.name());
            if let Err(e) = native.share(request) {
                tracing::warn!("Native share via {} failed: {}", native.name(), e);
            }
            return ShareOutcome::Native;
        }

        tracing::debug!("Sharing '{}' via {}", request.title, self.fallback.name());
        if let Err(e) = self.fallback.share(request) {
            tracing::warn!("Share via {} failed: {}", self.fallback.name(), e);
        }
        ShareOutcome::Clipboard
    }
}

impl Default for ShareDispatcher {
    fn default() -> Self {
        Self::new(None, Box::new(ClipboardShare))
    }
}
