//! Value folding.

use std::io::Write;

use vdir_core::constants::FOLD;

/// Writes the value part of a content line, starting a continuation line
/// after every `width` units.
///
/// A unit is one character or one escape sequence, so `\n` is never split
/// across a fold.
pub(crate) struct FoldingWriter<'w, W> {
    out: &'w mut W,
    width: usize,
    written: usize,
}

impl<'w, W: Write> FoldingWriter<'w, W> {
    pub(crate) fn new(out: &'w mut W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
            written: 0,
        }
    }

    pub(crate) fn write_unit(&mut self, unit: &str) -> std::io::Result<()> {
        if self.written == self.width {
            self.out.write_all(FOLD.as_bytes())?;
            self.written = 0;
        }
        self.out.write_all(unit.as_bytes())?;
        self.written += 1;
        Ok(())
    }

    pub(crate) fn write_char(&mut self, c: char) -> std::io::Result<()> {
        let mut buf = [0u8; 4];
        self.write_unit(c.encode_utf8(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(s: &str, width: usize) -> String {
        let mut out = Vec::new();
        let mut writer = FoldingWriter::new(&mut out, width);
        for c in s.chars() {
            writer.write_char(c).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn short_value_unchanged() {
        assert_eq!(fold("John Doe", 76), "John Doe");
    }

    #[test]
    fn exact_width_is_not_folded() {
        let value = "X".repeat(76);
        assert_eq!(fold(&value, 76), value);
    }

    #[test]
    fn fold_after_width() {
        let folded = fold(&"X".repeat(80), 76);
        let parts: Vec<&str> = folded.split("\r\n ").collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 76);
        assert_eq!(parts[1].len(), 4);
    }

    #[test]
    fn fold_multiple_times() {
        let folded = fold(&"X".repeat(200), 76);
        assert_eq!(folded.matches("\r\n ").count(), 2);
    }

    #[test]
    fn fold_respects_utf8() {
        let folded = fold(&"日".repeat(30), 7);
        let counts: Vec<usize> = folded
            .split("\r\n ")
            .map(|part| part.chars().filter(|&c| c == '日').count())
            .collect();
        assert_eq!(counts, vec![7, 7, 7, 7, 2]);
    }

    #[test]
    fn escape_units_are_not_split() {
        let mut out = Vec::new();
        let mut writer = FoldingWriter::new(&mut out, 2);
        for unit in ["a", r"\n", r"\;", "b"] {
            writer.write_unit(unit).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "a\\n\r\n \\;b");
    }
}
