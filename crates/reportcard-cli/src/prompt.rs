//! Ask-until-valid console input.
//!
//! Every `ask_*` call prints its prompt, reads one line, and repeats with a
//! hint until the answer is acceptable. End of input is an error so a closed
//! stdin never spins forever.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use anyhow::{Context, Result};

/// Interactive input/output pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of output.
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", message.as_ref()).context("failed to write output")
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            anyhow::bail!("input closed while waiting for: {}", prompt.trim());
        }
        Ok(line.trim().to_string())
    }

    /// Free text. Blank answers are refused, and so are all-digit answers
    /// unless `allow_digits` is set.
    pub fn ask_text(&mut self, prompt: &str, allow_digits: bool) -> Result<String> {
        loop {
            let answer = self.read_answer(prompt)?;
            if answer.is_empty() {
                self.say("Please enter a value!")?;
                continue;
            }
            if !allow_digits && answer.chars().all(|c| c.is_ascii_digit()) {
                self.say("Please enter a proper string!")?;
                continue;
            }
            return Ok(answer);
        }
    }

    /// One of a fixed set of options, compared case-insensitively. Returns
    /// the matching option.
    pub fn ask_choice<'a>(&mut self, prompt: &str, options: &[&'a str]) -> Result<&'a str> {
        loop {
            let answer = self.read_answer(prompt)?.to_lowercase();
            if let Some(option) = options.iter().copied().find(|o| o.to_lowercase() == answer) {
                return Ok(option);
            }
            self.say(format!(
                "\nPlease enter a valid option from: ({})",
                options.join(", ")
            ))?;
        }
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask_choice(prompt, &["y", "n"])? == "y")
    }

    /// An integer within `range`.
    pub fn ask_number_in(&mut self, prompt: &str, range: RangeInclusive<u32>) -> Result<u32> {
        loop {
            let answer = self.read_answer(prompt)?;
            match answer.parse::<i64>() {
                Ok(n) => match u32::try_from(n) {
                    Ok(n) if range.contains(&n) => return Ok(n),
                    _ => self.say(format!(
                        "\nPlease enter a value from {} to {}",
                        range.start(),
                        range.end()
                    ))?,
                },
                Err(_) => self.say("Invalid input! Expected an integer")?,
            }
        }
    }

    /// An integer from a discrete set, e.g. a menu entry.
    pub fn ask_option(&mut self, prompt: &str, options: &[u32]) -> Result<u32> {
        loop {
            let answer = self.read_answer(prompt)?;
            match answer.parse::<u32>() {
                Ok(n) if options.contains(&n) => return Ok(n),
                Ok(_) => {
                    let listed: Vec<String> = options.iter().map(u32::to_string).collect();
                    self.say(format!(
                        "\nPlease enter a valid option from: ({})",
                        listed.join(", ")
                    ))?;
                }
                Err(_) => self.say("Invalid input! Expected an integer")?,
            }
        }
    }
}
