//! Line-oriented prompts that re-ask until the answer is usable.
//!
//! Every read returns `Ok(None)` at end of input, which the session treats as Exit.
//! Input bytes that are not UTF-8 are replaced with U+FFFD rather than failing.

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    async fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks until the answer is a whole number within `min..=max`.
    pub async fn read_int(&mut self, prompt: &str, min: u32, max: u32) -> std::io::Result<Option<u32>> {
        loop {
            let Some(line) = self.read_line(prompt).await? else {
                return Ok(None);
            };
            let Ok(value) = line.trim().parse::<i64>() else {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                continue;
            };
            match u32::try_from(value) {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                _ => writeln!(
                    self.output,
                    "Invalid range. Please enter between {min} and {max}."
                )?,
            }
        }
    }

    /// Asks until the answer, minus its line ending, is not empty.
    pub async fn read_non_empty_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        loop {
            let Some(line) = self.read_line(prompt).await? else {
                return Ok(None);
            };
            if !line.is_empty() {
                return Ok(Some(line));
            }
            writeln!(self.output, "Input cannot be empty. Try again.")?;
        }
    }
}
