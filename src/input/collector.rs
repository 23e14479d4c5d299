//! Prompting loop around the validators
//!
//! Generic over the reader and writer so the shell can be driven from tests
//! with in-memory buffers.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};

use super::validate::{parse_amount, parse_category, parse_date, parse_description};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, DEFAULT_DATE_FORMAT};

/// Reads answers from `reader`, writing prompts and complaints to `writer`
pub struct InputCollector<R, W> {
    reader: R,
    writer: W,
    date_format: String,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            today: Local::now().date_naive(),
        }
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Override what a blank date resolves to
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Show `prompt` and read one line, without the trailing newline
    ///
    /// End of input is an I/O error so callers never loop on a closed stream.
    pub fn read_line(&mut self, prompt: &str) -> LedgerResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(LedgerError::Io("Unexpected end of input".into()));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Keep asking until `parse` accepts the answer
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(LedgerError::Validation(message)) => writeln!(self.writer, "{}", message)?,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn get_date(&mut self, prompt: &str, allow_default: bool) -> LedgerResult<NaiveDate> {
        let format = self.date_format.clone();
        let today = self.today;
        self.prompt_until(prompt, |s| parse_date(s, &format, allow_default, today))
    }

    pub fn get_amount(&mut self) -> LedgerResult<Money> {
        self.prompt_until("Enter the amount: ", parse_amount)
    }

    pub fn get_category(&mut self) -> LedgerResult<Category> {
        self.prompt_until("Enter the category (Income or Expense): ", parse_category)
    }

    pub fn get_description(&mut self) -> LedgerResult<String> {
        let line = self.read_line("Enter a description (optional): ")?;
        Ok(parse_description(&line))
    }

    /// Like [`get_amount`](Self::get_amount), but a blank answer yields `None`
    pub fn get_optional_amount(&mut self, prompt: &str) -> LedgerResult<Option<Money>> {
        self.prompt_until(prompt, |s| {
            if s.trim().is_empty() {
                Ok(None)
            } else {
                parse_amount(s).map(Some)
            }
        })
    }

    /// Like [`get_category`](Self::get_category), but a blank answer yields `None`
    pub fn get_optional_category(&mut self, prompt: &str) -> LedgerResult<Option<Category>> {
        self.prompt_until(prompt, |s| {
            if s.trim().is_empty() {
                Ok(None)
            } else {
                parse_category(s).map(Some)
            }
        })
    }

    /// Free text where a blank answer yields `None`
    pub fn get_optional_text(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        let text = parse_description(&self.read_line(prompt)?);
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    /// Yes/no question; anything other than "y"/"yes" is a no
    pub fn confirm(&mut self, prompt: &str) -> LedgerResult<bool> {
        let answer = self.read_line(prompt)?.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
