use std::io::{BufRead, Write};

use dj_engine::Console;
use log::warn;

/// A console over any line reader and writer: stdin/stdout, or a script file.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> Option<String> {
        if let Err(e) = self.output.flush() {
            warn!("cannot flush output: {e}");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']);
                Some(trimmed.to_string())
            }
            Err(e) => {
                warn!("cannot read input: {e}");
                None
            }
        }
    }

    fn print_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{line}") {
            warn!("cannot write output: {e}");
        }
    }
}
