//! The text I/O boundary.
//!
//! The game never touches stdin or stdout itself. Every prompt goes through
//! a [`Console`], so a session can be driven by a terminal, a script file,
//! or a test.

use std::collections::VecDeque;

/// Line-oriented input and output.
pub trait Console {
    /// Block until the next line of input is available.
    ///
    /// The line comes without its terminator. `None` means input is over.
    fn read_line(&mut self) -> Option<String>;

    /// Show a line (or several, separated by `\n`) to the player.
    fn print_line(&mut self, line: &str);

    /// Show a question and wait for the answer.
    fn prompt(&mut self, question: &str) -> Option<String> {
        self.print_line(question);
        self.read_line()
    }
}

/// A console fed from a fixed list of inputs that records everything printed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will answer with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything printed so far, one entry per `print_line` call.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Everything printed so far as a single string.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    /// Forget what has been printed.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    /// Number of inputs not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Option<String> {
        self.inputs.pop_front()
    }

    fn print_line(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }
}
