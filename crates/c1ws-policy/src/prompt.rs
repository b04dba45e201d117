use std::io::{BufRead, Write};

use crate::error::{PolicyError, Result};

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `label`, read one line, return it with surrounding whitespace
    /// removed.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            let what = label.trim_end_matches(&[':', ' '][..]);
            return Err(PolicyError::InputClosed(what.to_string()));
        }
        Ok(line.trim().to_string())
    }

    /// Use `preset` when present, otherwise ask.
    pub fn ask_unless(&mut self, preset: Option<String>, label: &str) -> Result<String> {
        match preset {
            Some(value) => Ok(value.trim().to_string()),
            None => self.ask(label),
        }
    }

    /// Yes/no question; only `y` or `yes` count as yes.
    pub fn confirm(&mut self, label: &str) -> Result<bool> {
        let answer = self.ask(label)?.to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Write one line of output.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
