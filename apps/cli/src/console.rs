//! # Prompt Console
//!
//! Line-oriented prompting over any `BufRead`/`Write` pair. The menu runs
//! on locked stdin/stdout; tests run the same code over in-memory buffers.
//!
//! ## Prompt Contract
//! - every prompt returns `Ok(None)` at end of input, which callers treat
//!   as "abort the current action" (and the menu loop then exits)
//! - the typed helpers re-prompt on invalid input instead of failing, so
//!   a stray keystroke never aborts an action

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use stockroom_core::{validation, InventoryResult, ProductType};

/// Prompting helper around an input/output pair.
pub struct Console<R, W> {
    input: R,
    pub(crate) output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Consumes the console and returns the output sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `label`, then reads one line, trimmed.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until `validate` accepts the entered text.
    pub fn prompt_validated<F>(&mut self, label: &str, validate: F) -> io::Result<Option<String>>
    where
        F: Fn(&str) -> InventoryResult<()>,
    {
        loop {
            let Some(text) = self.prompt(label)? else {
                return Ok(None);
            };
            match validate(&text) {
                Ok(()) => return Ok(Some(text)),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    /// Prompts until a whole non-negative number is entered.
    pub fn prompt_u32(&mut self, label: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(text) = self.prompt(label)? else {
                return Ok(None);
            };
            match text.parse::<u32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid quantity, enter a whole number.")?,
            }
        }
    }

    /// Prompts until a valid (finite, non-negative) price is entered.
    pub fn prompt_price(&mut self, label: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(text) = self.prompt(label)? else {
                return Ok(None);
            };
            match text.parse::<f64>() {
                Ok(price) => match validation::validate_price(price) {
                    Ok(()) => return Ok(Some(price)),
                    Err(err) => writeln!(self.output, "{}", err)?,
                },
                Err(_) => writeln!(self.output, "Invalid number, please try again.")?,
            }
        }
    }

    /// Prompts until a valid `YYYY-MM-DD` date is entered.
    pub fn prompt_date(&mut self, label: &str) -> io::Result<Option<NaiveDate>> {
        loop {
            let Some(text) = self.prompt(label)? else {
                return Ok(None);
            };
            match validation::parse_expiry_date(&text) {
                Ok(date) => return Ok(Some(date)),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    /// Prompts until one of the known product types is entered.
    pub fn prompt_product_type(&mut self, label: &str) -> io::Result<Option<ProductType>> {
        loop {
            let Some(text) = self.prompt(label)? else {
                return Ok(None);
            };
            match text.parse::<ProductType>() {
                Ok(product_type) => return Ok(Some(product_type)),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
