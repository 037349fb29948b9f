//! Line-oriented console over any reader/writer pair.
//!
//! Production code uses stdin/stdout; tests drive a whole session from a
//! byte slice and capture the transcript in a `Vec<u8>`.

use crate::errors::{AppError, AppResult};
use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

pub type StdConsole = Console<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say<T: Display>(&mut self, line: T) -> AppResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `prompt` (no newline) and read one line without its terminator.
    /// Bytes that are not UTF-8 are replaced, so such a line is just another
    /// answer for the caller to reject. Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Print `prompt` and read one answer, trimmed.
    /// Returns `None` once the input is exhausted.
    pub fn read_answer(&mut self, prompt: &str) -> AppResult<Option<String>> {
        Ok(self.read_line(prompt)?.map(|a| a.trim().to_string()))
    }

    /// Like `read_answer`, but end of input is an `InputClosed` error.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        self.read_answer(prompt)?.ok_or(AppError::InputClosed)
    }

    /// Yes/no question: only the exact word "yes" (any case) is a yes.
    /// End of input is a no.
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        Ok(self
            .read_line(prompt)?
            .is_some_and(|a| a.eq_ignore_ascii_case("yes")))
    }
}
