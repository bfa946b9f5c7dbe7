//! Interactive prompts for credentials missing from flags and config.

use std::io::{self, BufRead, Write};

pub trait Prompt {
    fn user(&mut self) -> io::Result<String>;
    fn password(&mut self, user: &str) -> io::Result<String>;
}

/// Prompts on the terminal. Prompts go to stderr so stdout only carries the report.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn user(&mut self) -> io::Result<String> {
        let mut stderr = io::stderr();
        write!(stderr, "Enter user: ")?;
        stderr.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Input is not echoed.
    fn password(&mut self, user: &str) -> io::Result<String> {
        rpassword::prompt_password(format!("Enter password for {}: ", user))
    }
}
