use fridge::error::{FridgeError, Result};
use fridge::presenter::{Confirm, Proposal};
use std::io::{self, BufRead, Write};

/// Asks on stdout and reads the answer from stdin. Only `y` or `yes` agree.
pub struct Prompt;

impl Confirm for Prompt {
    fn confirm(&mut self, proposal: &Proposal) -> Result<bool> {
        print!("{} [y/N]: ", proposal.describe());
        io::stdout().flush().map_err(FridgeError::Io)?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(FridgeError::Io)?;

        Ok(is_yes(&input))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
