//! Interactive prompts
//!
//! Asks for a value until a valid one is entered. Generic over the reader and
//! writer so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use crate::error::ConsoleError;
use crate::input::{parse_count, parse_threshold};

pub struct Prompter<'a, R: BufRead, W: Write> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Prompter { input, output }
    }

    pub fn ask_count(&mut self) -> Result<u32, ConsoleError> {
        self.ask(
            "How many aircraft should be generated? (e.g. 100): ",
            parse_count,
            "Please enter a whole number >= 1.",
        )
    }

    pub fn ask_threshold(&mut self) -> Result<f64, ConsoleError> {
        self.ask(
            "Collision threshold? (e.g. 50.0): ",
            parse_threshold,
            "Please enter a number >= 0.",
        )
    }

    fn ask<T>(
        &mut self,
        question: &str,
        parse: fn(&str) -> Result<T, ConsoleError>,
        retry: &str,
    ) -> Result<T, ConsoleError> {
        let mut line = String::new();
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::EndOfInput);
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("rejected input: {e}");
                    writeln!(self.output, "{retry}")?;
                }
            }
        }
    }
}
