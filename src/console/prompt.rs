//! Line-based prompting over any reader/writer pair
//!
//! Every `ask_*` helper writes its prompt, reads one line and loops until the
//! answer passes validation, printing a corrective message on each rejection.
//! End of input surfaces as [`ConsoleError::InputClosed`].

use crate::types::ConsoleError;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Prompting front-end for a console session
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write text without a trailing newline and flush it
    pub fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a full line
    pub fn println(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line with the line terminator stripped
    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Show a prompt and return the raw answer
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.print(prompt)?;
        self.read_line()
    }

    /// Ask for a whole number within `range`
    pub fn ask_number(
        &mut self,
        prompt: &str,
        range: RangeInclusive<usize>,
        rejection: &str,
    ) -> Result<usize, ConsoleError> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.trim().parse::<usize>() {
                Ok(n) if range.contains(&n) => return Ok(n),
                _ => self.println(rejection)?,
            }
        }
    }

    /// Ask for a currency amount accepted by `check`
    ///
    /// `check` returns the message to show when the amount is out of range.
    /// Answers may carry a leading `$`.
    pub fn ask_amount<F>(&mut self, prompt: &str, check: F) -> Result<Decimal, ConsoleError>
    where
        F: Fn(Decimal) -> Result<(), String>,
    {
        loop {
            let answer = self.ask(prompt)?;
            let cleaned = answer.trim().trim_start_matches('$');
            match Decimal::from_str(cleaned) {
                Ok(amount) => match check(amount) {
                    Ok(()) => return Ok(amount),
                    Err(message) => self.println(&message)?,
                },
                Err(_) => self.println("Invalid amount. Please enter a number.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut p = prompter("first\r\nsecond\nthird");
        assert_eq!(p.read_line().unwrap(), "first");
        assert_eq!(p.read_line().unwrap(), "second");
        assert_eq!(p.read_line().unwrap(), "third");
        assert_eq!(p.read_line(), Err(ConsoleError::InputClosed));
    }

    #[test]
    fn test_ask_number_reprompts_until_in_range() {
        let mut p = prompter("0\nabc\n7\n  3 \n");
        assert_eq!(p.ask_number("Pick: ", 1..=5, "Nope.").unwrap(), 3);

        let out = output(p);
        assert_eq!(out.matches("Pick: ").count(), 4);
        assert_eq!(out.matches("Nope.").count(), 3);
    }

    #[test]
    fn test_ask_number_eof() {
        let mut p = prompter("9\n");
        assert_eq!(
            p.ask_number("Pick: ", 1..=5, "Nope."),
            Err(ConsoleError::InputClosed)
        );
    }

    #[test]
    fn test_ask_amount_applies_check() {
        let mut p = prompter("-5\nten\n$12.50\n");
        let amount = p
            .ask_amount("Amount: $", |a| {
                if a < Decimal::ZERO {
                    Err("Amount must not be negative.".to_string())
                } else {
                    Ok(())
                }
            })
            .unwrap();
        assert_eq!(amount, Decimal::new(1250, 2));

        let out = output(p);
        assert!(out.contains("Amount must not be negative."));
        assert!(out.contains("Invalid amount. Please enter a number."));
    }
}
