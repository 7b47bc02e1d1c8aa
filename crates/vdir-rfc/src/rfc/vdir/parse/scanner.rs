//! Character scanner with transparent line unfolding.
//!
//! Decodes UTF-8 from a byte source one character at a time and removes fold
//! points (CRLF or bare LF followed by a single SPACE or HTAB) before the
//! decoder sees them. Any other CRLF, LF or lone CR is reported as a single
//! `'\n'`.

use std::io::BufRead;

use super::error::{DecodeError, DecodeResult};

pub(crate) struct Scanner<R> {
    reader: R,
    /// Raw character lookahead, before unfolding.
    raw_peeked: Option<Option<char>>,
    /// Logical character lookahead, after unfolding.
    peeked: Option<Option<char>>,
    line: usize,
}

impl<R: BufRead> Scanner<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            raw_peeked: None,
            peeked: None,
            line: 1,
        }
    }

    /// Line number of the most recently consumed raw character.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn into_inner(self) -> R {
        self.reader
    }

    /// Returns the next logical character without consuming it.
    pub(crate) fn peek(&mut self) -> DecodeResult<Option<char>> {
        if let Some(c) = self.peeked {
            return Ok(c);
        }
        let c = self.advance()?;
        self.peeked = Some(c);
        Ok(c)
    }

    /// Consumes the next logical character.
    pub(crate) fn next(&mut self) -> DecodeResult<Option<char>> {
        if let Some(c) = self.peeked.take() {
            return Ok(c);
        }
        self.advance()
    }

    fn advance(&mut self) -> DecodeResult<Option<char>> {
        loop {
            let Some(c) = self.next_raw()? else {
                return Ok(None);
            };
            if c != '\r' && c != '\n' {
                return Ok(Some(c));
            }
            if c == '\r' && self.peek_raw()? == Some('\n') {
                self.next_raw()?;
            }
            self.line += 1;

            // Fold: drop the line break and exactly one whitespace character
            if matches!(self.peek_raw()?, Some(' ' | '\t')) {
                self.next_raw()?;
                continue;
            }
            return Ok(Some('\n'));
        }
    }

    fn peek_raw(&mut self) -> DecodeResult<Option<char>> {
        if let Some(c) = self.raw_peeked {
            return Ok(c);
        }
        let c = self.read_char()?;
        self.raw_peeked = Some(c);
        Ok(c)
    }

    fn next_raw(&mut self) -> DecodeResult<Option<char>> {
        if let Some(c) = self.raw_peeked.take() {
            return Ok(c);
        }
        self.read_char()
    }

    fn read_char(&mut self) -> DecodeResult<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = match lead {
            0x00..=0x7F => return Ok(Some(char::from(lead))),
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(DecodeError::InvalidUtf8 { line: self.line }),
        };

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            *slot = self
                .read_byte()?
                .ok_or(DecodeError::InvalidUtf8 { line: self.line })?;
        }

        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or(DecodeError::InvalidUtf8 { line: self.line })
    }

    fn read_byte(&mut self) -> DecodeResult<Option<u8>> {
        let byte = loop {
            match self.reader.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        };
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }
}
