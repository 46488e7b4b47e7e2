//! Console loop: ask whether to search, read a text and a pattern, print the
//! outcome, repeat until the answer is "no" or input ends.

use std::io::{self, BufRead, Write};

use crate::engine::Searcher;
use crate::error::PromptError;
use crate::report::render_result;

const ASK_CONTINUE: &str = "Do you want to run custom texts? (yes/no): ";
const ASK_TEXT: &str = "Please enter the text to search for: ";
const ASK_PATTERN: &str = "Please enter the pattern string to search for: ";

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run sessions until the user declines. Returns how many searches ran.
    pub fn run(&mut self, searcher: &Searcher) -> Result<usize, PromptError> {
        let mut sessions = 0;
        while self.ask_yes_no(ASK_CONTINUE)? {
            let Some(text) = self.ask_non_empty(ASK_TEXT)? else {
                break;
            };
            let Some(pattern) = self.ask_non_empty(ASK_PATTERN)? else {
                break;
            };
            writeln!(self.output)?;
            writeln!(self.output, "Searching for text '{}' in pattern '{}' ...", text, pattern)?;

            let result = searcher.search(&text, &pattern)?;
            writeln!(self.output, "{}", render_result(&result))?;
            writeln!(self.output)?;
            sessions += 1;
        }
        Ok(sessions)
    }

    fn read_line(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// End of input counts as "no".
    fn ask_yes_no(&mut self, message: &str) -> io::Result<bool> {
        loop {
            let Some(answer) = self.read_line(message)? else {
                return Ok(false);
            };
            match answer.to_lowercase().as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => {
                    writeln!(self.output, "Please enter 'yes' or 'no'.")?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    fn ask_non_empty(&mut self, message: &str) -> io::Result<Option<String>> {
        loop {
            match self.read_line(message)? {
                None => return Ok(None),
                Some(line) if line.is_empty() => {
                    writeln!(self.output, "Input cannot be empty. Please try again.")?;
                    writeln!(self.output)?;
                }
                Some(line) => return Ok(Some(line)),
            }
        }
    }
}
