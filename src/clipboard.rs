//! Native clipboard backends for the CLI
//!
//! - [`CommandClipboard`]: primary path. Pipes text into the first clipboard
//!   tool found on `PATH` (wl-copy, pbcopy, xclip, xsel, clip).
//! - [`Osc52`]: fallback. Writes an OSC 52 escape sequence so the terminal
//!   sets the clipboard itself, which also works over SSH.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::Stdio;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use ptk_app::{ClipboardService, LegacyCopy, LocalClipboard};
use ptk_core::prelude::*;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Clipboard tools and the arguments that make them read stdin, in
/// preference order
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("pbcopy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// Service wired with the native backends
pub type NativeClipboard = ClipboardService<CommandClipboard, Osc52>;

/// Build the clipboard service for this machine.
///
/// With `json_output`, stdout carries NDJSON events and the OSC 52 fallback
/// is disabled.
pub fn native_clipboard(json_output: bool) -> NativeClipboard {
    let fallback = Osc52::from_env().stdout_reserved(json_output);
    ClipboardService::new(CommandClipboard::detect(), fallback)
}

/// Pipes text into an external clipboard tool
#[derive(Debug, Clone, Default)]
pub struct CommandClipboard {
    tool: Option<(PathBuf, &'static [&'static str])>,
}

impl CommandClipboard {
    /// Use the first clipboard tool available on `PATH`
    pub fn detect() -> Self {
        let tool = CLIPBOARD_TOOLS.iter().find_map(|(name, args)| {
            which::which(name).ok().map(|path| (path, *args))
        });
        match &tool {
            Some((path, _)) => debug!("Using clipboard tool {}", path.display()),
            None => debug!("No clipboard tool found on PATH"),
        }
        Self { tool }
    }

    /// Use a specific program
    pub fn with_program(program: impl Into<PathBuf>, args: &'static [&'static str]) -> Self {
        Self {
            tool: Some((program.into(), args)),
        }
    }

    pub fn is_available(&self) -> bool {
        self.tool.is_some()
    }
}

impl LocalClipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let Some((program, args)) = &self.tool else {
            return Err(Error::ClipboardUnavailable);
        };

        let mut child = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::clipboard(format!("failed to spawn {}: {}", program.display(), e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                drop(stdin);
                if let Err(kill_err) = child.kill().await {
                    debug!("Failed to reap {}: {}", program.display(), kill_err);
                }
                return Err(Error::clipboard(format!(
                    "failed to write to {}: {}",
                    program.display(),
                    e
                )));
            }
            // Dropping stdin closes the pipe so the tool sees EOF
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::clipboard(format!(
                "{} exited with {}",
                program.display(),
                status
            )))
        }
    }
}

/// Sets the clipboard through the terminal's OSC 52 support
#[derive(Debug, Clone, Copy, Default)]
pub struct Osc52 {
    /// Wrap the sequence for tmux passthrough
    tmux: bool,
    /// Stdout carries machine-readable output; never write escapes to it
    stdout_reserved: bool,
}

impl Osc52 {
    pub fn from_env() -> Self {
        Self {
            tmux: std::env::var_os("TMUX").is_some(),
            stdout_reserved: false,
        }
    }

    pub fn stdout_reserved(mut self, reserved: bool) -> Self {
        self.stdout_reserved = reserved;
        self
    }

    /// Escape sequence that places `text` on the clipboard
    pub fn sequence(&self, text: &str) -> String {
        let osc = format!("\x1b]52;c;{}\x07", STANDARD.encode(text));
        if self.tmux {
            format!("\x1bPtmux;\x1b{}\x1b\\", osc)
        } else {
            osc
        }
    }

    fn write_sequence(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        out.write_all(self.sequence(text).as_bytes())?;
        out.flush()
    }
}

impl LegacyCopy for Osc52 {
    fn copy(&self, text: &str) -> bool {
        if self.stdout_reserved {
            debug!("stdout carries JSON output, OSC 52 disabled");
            return false;
        }
        let stdout = io::stdout();
        if !stdout.is_terminal() {
            debug!("stdout is not a terminal, OSC 52 unavailable");
            return false;
        }
        match self.write_sequence(&mut stdout.lock(), text) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to write OSC 52 sequence: {}", e);
                false
            }
        }
    }
}
