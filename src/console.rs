// 💬 Console - Prompt/response over any reader and writer
// The binary wires stdin/stdout; tests drive it with in-memory buffers.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process' standard input and output
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print `message`, then read one line of reply
    ///
    /// Returns `None` once input is exhausted. The trailing newline is
    /// stripped; everything else is returned as typed.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        let reply = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(reply))
    }

    /// Ask a yes/no question; only "yes" (any case) counts as yes
    ///
    /// End of input is a "no".
    pub fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(self
            .prompt(message)?
            .is_some_and(|reply| reply.trim().eq_ignore_ascii_case("yes")))
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).context("Failed to write output")
    }

    /// Write `text` as-is, without adding a newline
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("Failed to write output")
    }

    /// Hand back the output sink (tests inspect what was printed)
    pub fn into_output(self) -> W {
        self.output
    }
}
