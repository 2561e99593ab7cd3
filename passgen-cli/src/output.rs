//! Where generated passwords go: stdout, optionally as JSON, and the clipboard.

use passgen_core::GenerationRequest;
use serde::Serialize;

/// One generated password as printed by `--json`.
#[derive(Serialize)]
struct GeneratedPassword<'a> {
    password: &'a str,
    words: usize,
    length: usize,
}

/// Renders `password` as a single output line.
pub(crate) fn render(
    password: &str,
    request: &GenerationRequest,
    json: bool,
) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(&GeneratedPassword {
            password,
            words: request.word_count,
            length: password.chars().count(),
        })
    } else {
        Ok(password.to_string())
    }
}

/// Places `text` on the system clipboard.
#[cfg(feature = "clipboard")]
pub(crate) fn copy_to_clipboard(text: &str) -> Result<(), String> {
    use clipboard::{ClipboardContext, ClipboardProvider};

    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| format!("Clipboard init error: {e}"))?;
    ctx.set_contents(text.to_string())
        .map_err(|e| format!("Clipboard set error: {e}"))
}

/// Placeholder used when the binary is built without clipboard support.
#[cfg(not(feature = "clipboard"))]
pub(crate) fn copy_to_clipboard(_text: &str) -> Result<(), String> {
    Err(
        "clipboard support is not available in this build (enable the `clipboard` feature)"
            .to_string(),
    )
}
