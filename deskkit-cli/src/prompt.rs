//! Line-oriented stdin prompts shared by the menu loops.

use anyhow::{Result, bail};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use deskkit_core::StoreError;
use std::io::{self, Write};

fn read_line() -> Result<String> {
    io::stdout().flush().ok();
    let mut s = String::new();
    if io::stdin().read_line(&mut s)? == 0 {
        bail!("input closed");
    }
    Ok(s.trim().to_string())
}

pub fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    read_line()
}

/// Prompt for a number. Non-numeric input is `None`, not an error.
pub fn prompt_number(label: &str) -> Result<Option<usize>> {
    Ok(prompt(label)?.parse().ok())
}

/// Like `prompt`, but shows the current value; blank input keeps it.
pub fn prompt_keep(label: &str, current: &str) -> Result<String> {
    let shown = if current.is_empty() { "N/A" } else { current };
    let answer = prompt(&format!("{label} (blank to keep '{shown}')"))?;
    Ok(if answer.is_empty() {
        current.to_string()
    } else {
        answer
    })
}

pub fn confirm(question: &str) -> Result<bool> {
    print!("{} (y/n): ", question);
    let answer = read_line()?.to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub fn pause() -> Result<()> {
    print!("Press Enter to continue...");
    read_line().map(|_| ())
}

pub fn clear_screen(enabled: bool) -> Result<()> {
    if enabled {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    }
    Ok(())
}

/// Text for a failed store call. Filesystem failures are also logged.
pub fn store_error_message(e: &StoreError) -> String {
    if e.is_user_error() {
        e.to_string()
    } else {
        log::error!("{e:?}");
        format!("File error: {e}")
    }
}
