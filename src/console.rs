use std::io::{self, BufRead, Write};

use log::error;

/// Where the operator is asked questions and shown results.
pub trait Console {
    /// Shows `question` and returns the trimmed answer. An unreadable input counts as an empty answer.
    fn ask(&mut self, question: &str) -> String;

    fn say(&mut self, message: &str);
}

pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        StdConsole::with_io(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        StdConsole { input, output }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn ask(&mut self, question: &str) -> String {
        if let Err(e) = write!(self.output, "{}", question).and_then(|_| self.output.flush()) {
            error!("Failed to write prompt: {}", e);
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => answer.trim().to_string(),
            Err(e) => {
                error!("Failed to read answer: {}", e);
                String::new()
            }
        }
    }

    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            error!("Failed to write output: {}", e);
        }
    }
}
