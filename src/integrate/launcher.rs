//! Opening bookmarks with an external program
//!
//! The launcher command is a template; `{url}` is replaced by the quoted
//! bookmark address. When the template has no placeholder the address is
//! appended as the last argument.

use std::process::{Command, Stdio};
use std::thread;

/// Placeholder expanded to the bookmark address
pub const URL_PLACEHOLDER: &str = "{url}";

/// Platform default opener
pub fn default_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open {url}"
    } else if cfg!(target_os = "windows") {
        "start \"\" {url}"
    } else {
        "xdg-open {url}"
    }
}

/// Launcher configuration
#[derive(Debug, Clone)]
pub struct Launcher {
    /// Command template with placeholders
    command: String,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(default_command())
    }
}

impl Launcher {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Expand the template for `url`
    pub fn expand(&self, url: &str) -> String {
        let quoted = shell_escape(url);
        if self.command.contains(URL_PLACEHOLDER) {
            self.command.replace(URL_PLACEHOLDER, &quoted)
        } else {
            format!("{} {}", self.command, quoted)
        }
    }

    /// Spawn the opener in the background; returns the child pid
    ///
    /// The child is reaped on a helper thread once it exits.
    pub fn open(&self, url: &str) -> anyhow::Result<u32> {
        let expanded = self.expand(url);

        // Detach stdio so the opener cannot scribble over the TUI
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&expanded)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        let pid = child.id();
        log::info!("launcher: spawned `{}` (pid {})", expanded, pid);
        thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                log::warn!("launcher: pid {} exited with {}", pid, status);
            }
            Ok(_) => {}
            Err(e) => log::warn!("launcher: failed to wait for pid {}: {}", pid, e),
        });
        Ok(pid)
    }
}

/// Escape a string for shell use
fn shell_escape(s: &str) -> String {
    if s.contains('\'') {
        format!("'{}'", s.replace('\'', "'\\''"))
    } else {
        format!("'{}'", s)
    }
}
