//! Line-oriented prompt helpers.
//!
//! `ConsoleInput` owns its reader and writer; both are released when it is
//! dropped, on every exit path of the session.

use std::fmt;
use std::io::{self, BufRead, Write};

/// Raw text for a numeric field did not parse as a floating-point number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatError {
    pub field: &'static str,
    pub raw: String,
}

impl fmt::Display for NumberFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid number for {}: '{}'. Please enter a numeric value.",
            self.field, self.raw
        )
    }
}

impl std::error::Error for NumberFormatError {}

/// Failure of the line source or sink.
#[derive(Debug)]
pub enum ConsoleError {
    Io(io::Error),
    /// The line source is exhausted.
    EndOfInput,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Io(e) => write!(f, "console i/o failed: {e}"),
            ConsoleError::EndOfInput => f.write_str("input stream ended"),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(e) => Some(e),
            ConsoleError::EndOfInput => None,
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(e: io::Error) -> Self {
        ConsoleError::Io(e)
    }
}

/// Parse trimmed operator text as `f64`.
///
/// `nan` and `inf` parse successfully; the scenario validator rejects them.
pub fn parse_number_field(field: &'static str, raw: &str) -> Result<f64, NumberFormatError> {
    raw.trim().parse::<f64>().map_err(|_| NumberFormatError {
        field,
        raw: raw.trim().to_string(),
    })
}

pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    number_format_errors: u64,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            number_format_errors: 0,
        }
    }

    /// Number-format errors seen so far (each one caused a re-prompt).
    pub fn number_format_errors(&self) -> u64 {
        self.number_format_errors
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn println(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ConsoleError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Write pre-rendered text as-is.
    pub fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Print `prompt` and read one line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD; the garbled text then
    /// fails number or state parsing like any other bad input.
    pub fn read_string(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.print(prompt)?;
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompt until the line parses as a number.
    pub fn read_double(&mut self, prompt: &str, field: &'static str) -> Result<f64, ConsoleError> {
        loop {
            let raw = self.read_string(prompt)?;
            match parse_number_field(field, &raw) {
                Ok(v) => return Ok(v),
                Err(err) => {
                    self.number_format_errors += 1;
                    tracing::warn!(field, raw = %err.raw, "number format error");
                    self.println(&err.to_string())?;
                }
            }
        }
    }

    /// Prompt until the answer is Y, YES, N or NO (any case).
    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        loop {
            let answer = self.read_string(prompt)?.trim().to_ascii_uppercase();
            match answer.as_str() {
                "Y" | "YES" => return Ok(true),
                "N" | "NO" => return Ok(false),
                _ => self.println("Invalid input. Enter Y or N.")?,
            }
        }
    }
}
