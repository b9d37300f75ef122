//! Line-based prompts for the interactive session

use std::io::{self, IsTerminal, Write};

use crate::error::{TrackerError, TrackerResult};

/// Print a prompt and read one line, trimmed; `None` at end of input
pub fn prompt_line(prompt: &str) -> TrackerResult<Option<String>> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| TrackerError::Io(e.to_string()))?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| TrackerError::Io(e.to_string()))?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Read a line, treating end of input as an error
pub fn prompt_required(prompt: &str) -> TrackerResult<String> {
    prompt_line(prompt)?.ok_or_else(|| TrackerError::Io("unexpected end of input".into()))
}

/// Read a line, substituting a default when the answer is empty
pub fn prompt_with_default(prompt: &str, default: &str) -> TrackerResult<String> {
    let input = prompt_required(prompt)?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Read a password without echo when attached to a terminal
///
/// Piped input falls back to a plain line read so scripted sessions work.
pub fn prompt_secret(prompt: &str) -> TrackerResult<String> {
    if io::stdin().is_terminal() {
        rpassword::prompt_password(prompt).map_err(|e| TrackerError::Io(e.to_string()))
    } else {
        prompt_required(prompt)
    }
}

/// Ask a yes/no question; anything but yes counts as no
pub fn prompt_confirm(prompt: &str) -> TrackerResult<bool> {
    let answer = prompt_required(prompt)?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
