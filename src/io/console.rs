use std::io::{BufRead, Write};

use crate::application::AppError;
use crate::domain::integer_len;

/// The line-oriented terminal boundary the session talks through.
///
/// Every read consumes one whole line, so a rejected value never leaks into
/// the next prompt. End of input is reported as [`AppError::EndOfInput`].
pub trait Console {
    /// Show `prompt` (no trailing newline) and read one line, without its line ending.
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError>;

    fn write_line(&mut self, line: &str) -> Result<(), AppError>;

    /// Read one line and parse the integer it starts with; the rest of the
    /// line is dropped, so "2.5" reads as 2.
    fn read_number(&mut self, prompt: &str) -> Result<i64, AppError> {
        let input = self.read_line(prompt)?;
        let number = input.trim_start();
        number[..integer_len(number)]
            .parse()
            .map_err(|_| AppError::InvalidNumber(input.clone()))
    }
}

/// A [`Console`] over any buffered reader and writer: stdin/stdout in the
/// binary, in-memory buffers in tests.
pub struct BufferedConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> BufferedConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for BufferedConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        // Raw bytes: input that is not UTF-8 is decoded lossily instead of failing
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Err(AppError::EndOfInput);
        }

        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
