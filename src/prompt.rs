use crate::error::{BikeshareError, Result};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Line-oriented terminal I/O over any reader/writer pair, so prompt loops can
/// be driven by a scripted input in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for report output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Print `prompt` and read one answer, trimmed and lower-cased.
    ///
    /// # Errors
    /// `InputClosed` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Ask until the answer is "yes" or "no"; anything else shows `reprompt`.
    ///
    /// # Errors
    /// `InputClosed` once the input is exhausted.
    pub fn confirm(&mut self, prompt: &str, reprompt: &str) -> Result<bool> {
        let mut answer = self.ask(prompt)?;
        loop {
            match answer.as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => answer = self.ask(reprompt)?,
            }
        }
    }
}
