//! Clipboard access
//!
//! Copies plain text with the native clipboard tools. When none of them
//! works (no display, remote session) the OSC 52 terminal escape sequence is
//! used instead, which also works over ssh and inside tmux. The terminal
//! confirms nothing, so an OSC 52 copy is reported as done once the sequence
//! is handed to the render thread.

use anyhow::{anyhow, bail};
use base64::Engine;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::mpsc::Sender;

/// Destination for copied text
pub trait Clipboard: Send {
    fn copy(&mut self, text: &str) -> anyhow::Result<()>;
}

/// The system clipboard, with the terminal as fallback
///
/// Escape sequences go through `terminal` so that only the render thread
/// writes to the terminal.
#[derive(Debug)]
pub struct SystemClipboard {
    terminal: Sender<String>,
}

impl SystemClipboard {
    pub fn new(terminal: Sender<String>) -> Self {
        Self { terminal }
    }

    fn copy_via(
        &self,
        text: &str,
        native: impl FnOnce(&str) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        match native(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::debug!("{:#}, falling back to OSC 52", e);
                let sequence = osc52_sequence(text, std::env::var_os("TMUX").is_some());
                self.terminal
                    .send(sequence)
                    .map_err(|_| anyhow!("Terminal output is closed"))
            }
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        self.copy_via(text, copy_with_native_tool)
    }
}

/// OSC 52 sequence for `text`, wrapped for tmux passthrough when needed
fn osc52_sequence(text: &str, in_tmux: bool) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    if in_tmux {
        format!("\x1bPtmux;\x1b\x1b]52;c;{}\x07\x1b\\", encoded)
    } else {
        format!("\x1b]52;c;{}\x07", encoded)
    }
}

fn copy_with_native_tool(text: &str) -> anyhow::Result<()> {
    let mut tools: Vec<(&str, &[&str])> = Vec::new();
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        tools.push(("wl-copy", &[]));
    }
    tools.push(("xclip", &["-selection", "clipboard"]));
    tools.push(("xsel", &["--clipboard", "--input"]));
    tools.push(("pbcopy", &[]));

    for (tool, args) in tools {
        match pipe_to(tool, args, text) {
            Ok(()) => {
                log::debug!("Copied to clipboard with {}", tool);
                return Ok(());
            }
            Err(e) => log::debug!("Clipboard tool {} unavailable: {}", tool, e),
        }
    }
    bail!("No clipboard tool available")
}

fn pipe_to(tool: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("{} exited with {}", tool, status)))
    }
}
