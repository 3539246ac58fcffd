// Terminal prompt adapter - Yes/no confirmation on stdin

use crate::error::{DjiError, DjiResult};
use crate::ports::ConfirmPort;
use std::io::{self, BufRead, Write};

/// Reads a yes/no answer from stdin
#[derive(Debug, Default)]
pub struct TerminalPromptAdapter;

impl TerminalPromptAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmPort for TerminalPromptAdapter {
    fn confirm(&self, question: &str, default: bool) -> DjiResult<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        loop {
            print!("{} {} ", question, hint);
            stdout.flush().map_err(|e| DjiError::io("<stdout>", e))?;

            let mut answer = String::new();
            let read = stdin
                .lock()
                .read_line(&mut answer)
                .map_err(|e| DjiError::io("<stdin>", e))?;
            if read == 0 {
                return Ok(default);
            }
            if let Some(answer) = parse_answer(&answer, default) {
                return Ok(answer);
            }
        }
    }
}

/// `None` asks again
fn parse_answer(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
