use std::io::{Read, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use arboard::Clipboard;

use crate::constants::CLIPBOARD_DAEMON_ENV;
use crate::error::{LinearError, LinearResult};
use crate::logging::{log_error, log_info};

const READY: &str = "ok";

/// Puts `text` on the system clipboard. On Linux the selection is served by a
/// background copy of this binary so it outlives the command.
pub fn copy_to_clipboard(text: &str) -> LinearResult<()> {
    #[cfg(target_os = "linux")]
    {
        copy_with_daemon(text)
    }
    #[cfg(not(target_os = "linux"))]
    {
        let mut clipboard = Clipboard::new().map_err(clipboard_error)?;
        clipboard.set_text(text.to_string()).map_err(clipboard_error)
    }
}

#[cfg(not(target_os = "linux"))]
fn clipboard_error(e: arboard::Error) -> LinearError {
    LinearError::ClipboardError(e.to_string())
}

#[cfg(target_os = "linux")]
fn copy_with_daemon(text: &str) -> LinearResult<()> {
    use std::io::{BufRead, BufReader};

    let exe = std::env::current_exe()?;
    let mut child = daemon_command(&exe)
        .spawn()
        .map_err(|e| LinearError::ClipboardError(format!("failed to start clipboard helper: {}", e)))?;

    // Dropping stdin sends EOF.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let mut reply = String::new();
    if let Some(stdout) = child.stdout.take() {
        BufReader::new(stdout).read_line(&mut reply)?;
    }

    let result = parse_daemon_reply(&reply);
    if result.is_err() {
        let _ = child.wait();
    }
    result
}

/// Command that starts the clipboard helper: this binary, detached from the
/// terminal's process group, text on stdin and one status line on stdout.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub fn daemon_command(exe: &Path) -> Command {
    let mut command = Command::new(exe);
    command
        .env(CLIPBOARD_DAEMON_ENV, "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    command
}

/// `ok` means the helper owns the clipboard; `error: <reason>` or nothing means it gave up.
pub fn parse_daemon_reply(reply: &str) -> LinearResult<()> {
    let reply = reply.trim();
    if reply == READY {
        return Ok(());
    }

    let message = reply
        .strip_prefix("error:")
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or("clipboard helper exited before taking the clipboard");
    Err(LinearError::ClipboardError(message.to_string()))
}

/// Body of the clipboard helper process started by [`daemon_command`].
pub fn serve_clipboard_daemon() {
    let mut stdout = std::io::stdout();
    let mut report = |line: String| {
        let _ = writeln!(stdout, "{}", line);
        let _ = stdout.flush();
    };

    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        report(format!("error: {}", e));
        return;
    }

    let mut clipboard = match Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            log_error(&format!("clipboard helper: {}", e));
            report(format!("error: {}", e));
            return;
        }
    };

    if let Err(e) = clipboard.set_text(text.clone()) {
        log_error(&format!("clipboard helper: {}", e));
        report(format!("error: {}", e));
        return;
    }
    report(READY.to_string());

    hold_selection(&mut clipboard, text);
}

/// Blocks until another program takes the selection over.
#[cfg(target_os = "linux")]
fn hold_selection(clipboard: &mut Clipboard, text: String) {
    use arboard::SetExtLinux;

    match clipboard.set().wait().text(text) {
        Ok(()) => log_info("Clipboard taken over by another program"),
        Err(e) => log_error(&format!("clipboard helper: {}", e)),
    }
}

#[cfg(not(target_os = "linux"))]
fn hold_selection(_clipboard: &mut Clipboard, _text: String) {
    log_info("Clipboard set");
}
