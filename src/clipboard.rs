use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
}

pub fn detect_platform() -> Platform {
    match env::consts::OS {
        "windows" => Platform::Windows,
        "macos" => Platform::MacOS,
        "linux" => Platform::Linux,
        other => {
            tracing::warn!(
                os = other,
                "Unknown platform, defaulting to Linux clipboard tools"
            );
            Platform::Linux
        }
    }
}

/// Places text on the system clipboard
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    fn set_text(&self, text: &str) -> Result<()>;
}

/// An external program that reads clipboard contents from stdin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ClipboardTool {
    const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

/// Candidate tools for a platform, in order of preference
pub fn clipboard_tools(platform: Platform, wayland: bool) -> Vec<ClipboardTool> {
    match platform {
        Platform::MacOS => vec![ClipboardTool::new("pbcopy", &[])],
        Platform::Windows => vec![ClipboardTool::new("clip", &[])],
        Platform::Linux => {
            let mut tools = Vec::with_capacity(3);
            if wayland {
                tools.push(ClipboardTool::new("wl-copy", &[]));
            }
            tools.push(ClipboardTool::new("xclip", &["-selection", "clipboard"]));
            tools.push(ClipboardTool::new("xsel", &["--clipboard", "--input"]));
            tools
        }
    }
}

/// Finds a tool's executable, `None` when it is not installed
pub type ToolLocator = fn(&str) -> Option<PathBuf>;

fn locate_on_path(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}

/// Picks the first available tool for `platform`
pub fn resolve_tool(
    platform: Platform,
    wayland: bool,
    locate: ToolLocator,
) -> Result<(ClipboardTool, PathBuf)> {
    let tools = clipboard_tools(platform, wayland);

    tools
        .iter()
        .find_map(|tool| locate(tool.program).map(|path| (*tool, path)))
        .ok_or_else(|| {
            let names: Vec<_> = tools.iter().map(|tool| tool.program).collect();
            AppError::clipboard(
                None,
                format!("No clipboard tool found (tried: {})", names.join(", ")),
            )
        })
}

/// Kills a tool whose input could not be delivered and reaps it
fn abandon(child: &mut Child) {
    if let Err(e) = child.kill() {
        tracing::debug!(error = %e, "Clipboard tool already exited");
    }
    if let Err(e) = child.wait() {
        tracing::warn!(error = %e, "Failed to reap clipboard tool");
    }
}

/// Clipboard access through the platform's command line tools
pub struct SystemClipboard {
    platform: Platform,
    locate: ToolLocator,
}

impl SystemClipboard {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            locate: locate_on_path,
        }
    }

    /// Replaces the `PATH` lookup used to find clipboard tools
    pub fn with_locator(mut self, locate: ToolLocator) -> Self {
        self.locate = locate;
        self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new(detect_platform())
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let wayland = env::var_os("WAYLAND_DISPLAY").is_some();
        let (tool, path) = resolve_tool(self.platform, wayland, self.locate)?;
        tracing::debug!(tool = tool.program, path = %path.display(), "Copying to clipboard");

        let tool_name = Some(tool.program.to_string());

        // stdout/stderr stay detached: xclip forks a child that keeps serving the selection.
        let mut child = Command::new(&path)
            .args(tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AppError::clipboard(tool_name.clone(), format!("Failed to start: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                abandon(&mut child);
                return Err(AppError::clipboard(tool_name, format!("Failed to write: {e}")));
            }
        }

        let status = child
            .wait()
            .map_err(|e| AppError::clipboard(tool_name.clone(), format!("Failed to wait: {e}")))?;

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            return Err(AppError::clipboard(
                tool_name,
                format!("Exited with status: {code}"),
            ));
        }

        Ok(())
    }
}
