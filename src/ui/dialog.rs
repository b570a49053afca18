//! Confirmation prompts. Destructive operations only run after an explicit
//! accept; the core exposes previews, this module owns the I/O.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout and read the answer from stdin.
pub fn confirm(question: &str, default_yes: bool) -> AppResult<bool> {
    if default_yes {
        print!("{} [Y/n]: ", question);
    } else {
        print!("{} [y/N]: ", question);
    }
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();

    if default_yes {
        Ok(answer != "n")
    } else {
        Ok(answer == "y")
    }
}
