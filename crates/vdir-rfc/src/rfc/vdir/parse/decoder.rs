//! Streaming block decoder (RFC 2425 §5.8.1).

use std::io::BufRead;

use vdir_core::constants::{BEGIN, END};

use super::error::{DecodeError, DecodeResult};
use super::scanner::Scanner;
use crate::error::VdirResult;
use crate::rfc::vdir::core::{Block, Parameter, Property, StructuredValue, Value};
use crate::rfc::vdir::map::{Record, from_block};

/// Reads directory blocks from a byte stream.
///
/// The decoder consumes its input one character at a time and keeps no state
/// between blocks other than the read position, so consecutive calls to
/// [`Decoder::read_block`] walk through a stream of concatenated blocks.
///
/// ```rust
/// use vdir_rfc::rfc::vdir::Decoder;
///
/// let input = "BEGIN:VCARD\r\nFN:John Doe\r\nEND:VCARD\r\n";
/// let mut decoder = Decoder::new(input.as_bytes());
///
/// let card = decoder.read_block().unwrap().unwrap();
/// assert_eq!(card.profile, "VCARD");
/// assert_eq!(card.properties[0].text_value(), "John Doe");
/// assert!(decoder.read_block().unwrap().is_none());
/// ```
pub struct Decoder<R> {
    scanner: Scanner<R>,
    failed: bool,
}

impl<R: BufRead> Decoder<R> {
    /// Creates a decoder reading from `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            scanner: Scanner::new(reader),
            failed: false,
        }
    }

    /// Consumes the decoder, returning the underlying reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.scanner.into_inner()
    }

    /// Reads the next content line.
    ///
    /// Returns `Ok(None)` when only whitespace remains.
    ///
    /// ## Errors
    /// Returns an error if the line is truncated, has no colon separator, has
    /// an empty name, or the input is not valid UTF-8.
    pub fn read_content_line(&mut self) -> DecodeResult<Option<Property>> {
        Ok(self.next_line()?.map(|(_, prop)| prop))
    }

    /// Reads the next block, including all nested blocks.
    ///
    /// Returns `Ok(None)` on a clean end of input between blocks.
    ///
    /// ## Errors
    /// Returns an error if the first line is not `BEGIN`, a `BEGIN` has no
    /// profile, an `END` names a different profile than the block it closes,
    /// or the input ends before the outermost block is closed.
    #[tracing::instrument(skip(self), fields(line = self.scanner.line()))]
    pub fn read_block(&mut self) -> DecodeResult<Option<Block>> {
        let Some((line, begin)) = self.next_line()? else {
            tracing::trace!("End of input");
            return Ok(None);
        };
        if !begin.is_named(BEGIN) {
            return Err(DecodeError::UnexpectedProperty {
                line,
                expected: BEGIN.to_string(),
                found: begin.name,
            });
        }

        let mut current = open_block(&begin, line)?;
        // Blocks opened but not yet closed, outermost first.
        let mut parents: Vec<Block> = Vec::new();

        loop {
            let Some((line, prop)) = self.next_line()? else {
                return Err(DecodeError::UnexpectedEof {
                    line: self.scanner.line(),
                    context: format!("{BEGIN}:{}", current.profile),
                });
            };

            if prop.is_named(BEGIN) {
                let child = open_block(&prop, line)?;
                tracing::trace!(profile = %child.profile, depth = parents.len() + 1, "Nested block");
                parents.push(std::mem::replace(&mut current, child));
            } else if prop.is_named(END) {
                let found = prop.text_value();
                if !found.eq_ignore_ascii_case(&current.profile) {
                    return Err(DecodeError::ProfileMismatch {
                        line,
                        expected: current.profile,
                        found: found.to_string(),
                    });
                }
                match parents.pop() {
                    Some(parent) => {
                        let finished = std::mem::replace(&mut current, parent);
                        current.blocks.push(finished);
                    }
                    None => {
                        tracing::debug!(
                            profile = %current.profile,
                            properties = current.properties.len(),
                            blocks = current.blocks.len(),
                            "Block decoded"
                        );
                        return Ok(Some(current));
                    }
                }
            } else {
                current.properties.push(prop);
            }
        }
    }

    /// Reads the next block and maps it onto a fresh `T`.
    ///
    /// ## Errors
    /// Returns a decode error as [`Decoder::read_block`] does, or a mapping
    /// error if `T`'s field layout cannot hold the block.
    pub fn decode<T: Record + Default>(&mut self) -> VdirResult<Option<T>> {
        let Some(block) = self.read_block()? else {
            return Ok(None);
        };
        let mut record = T::default();
        from_block(&mut record, &block)?;
        Ok(Some(record))
    }

    /// Reads a content line together with the line number it started on.
    fn next_line(&mut self) -> DecodeResult<Option<(usize, Property)>> {
        self.skip_whitespace()?;
        if self.scanner.peek()?.is_none() {
            return Ok(None);
        }
        let line = self.scanner.line();

        let (group, name, delimiter) = self.read_group_name(line)?;
        let mut prop = Property {
            group,
            name,
            params: Vec::new(),
            value: StructuredValue::new(),
        };
        if delimiter == ';' {
            self.read_parameters(&mut prop, line)?;
        }
        prop.value = self.read_value()?;

        tracing::trace!(line, name = %prop.name, "Content line");
        Ok(Some((line, prop)))
    }

    fn skip_whitespace(&mut self) -> DecodeResult<()> {
        while matches!(self.scanner.peek()?, Some(' ' | '\t' | '\n')) {
            self.scanner.next()?;
        }
        Ok(())
    }

    /// Reads `[group.]name` up to the `:` or `;` that follows it.
    fn read_group_name(&mut self, line: usize) -> DecodeResult<(Option<String>, String, char)> {
        let mut group: Option<String> = None;
        let mut buf = String::new();

        loop {
            match self.scanner.next()? {
                None => {
                    return Err(DecodeError::UnexpectedEof {
                        line,
                        context: "property name".to_string(),
                    });
                }
                Some('\n') => return Err(DecodeError::MissingColon { line, name: buf }),
                Some('.') => {
                    let segment = std::mem::take(&mut buf);
                    group = Some(match group {
                        Some(prefix) => format!("{prefix}.{segment}"),
                        None => segment,
                    });
                }
                Some(delimiter @ (':' | ';')) => {
                    if buf.is_empty() {
                        return Err(DecodeError::EmptyPropertyName { line });
                    }
                    return Ok((group, buf.to_ascii_uppercase(), delimiter));
                }
                Some(c) => buf.push(c),
            }
        }
    }

    /// Reads `name[=value(,value)*]` pairs up to the first unquoted `:`.
    fn read_parameters(&mut self, prop: &mut Property, line: usize) -> DecodeResult<()> {
        let mut name = String::new();
        let mut values: Vec<String> = Vec::new();
        let mut buf = String::new();
        let mut has_value = false;
        let mut quoted = false;
        let mut escaped = false;

        loop {
            let Some(c) = self.scanner.next()? else {
                return Err(DecodeError::UnexpectedEof {
                    line,
                    context: "parameters".to_string(),
                });
            };
            if c == '\n' {
                return Err(DecodeError::MissingColon {
                    line,
                    name: prop.name.clone(),
                });
            }

            if escaped {
                escaped = false;
                if matches!(c, 'n' | 'N') {
                    buf.push('\n');
                    continue;
                }
                // Only `\n` is an escape; the following character keeps its meaning.
                buf.push('\\');
            }

            match c {
                '\\' => escaped = true,
                '"' => quoted = !quoted,
                '=' if !quoted && !has_value => {
                    name = std::mem::take(&mut buf);
                    has_value = true;
                }
                ',' if !quoted && has_value => values.push(std::mem::take(&mut buf)),
                ';' | ':' if !quoted => {
                    if has_value {
                        values.push(std::mem::take(&mut buf));
                    } else {
                        name = std::mem::take(&mut buf);
                    }
                    if !name.is_empty() {
                        prop.add_param(Parameter::multi(
                            std::mem::take(&mut name),
                            std::mem::take(&mut values),
                        ));
                    }
                    values.clear();
                    has_value = false;

                    if c == ':' {
                        return Ok(());
                    }
                }
                _ => buf.push(c),
            }
        }
    }

    /// Reads value components up to the end of the logical line.
    fn read_value(&mut self) -> DecodeResult<StructuredValue> {
        let mut value = StructuredValue::new();
        let mut component = Value::new();
        let mut buf = String::new();

        loop {
            match self.scanner.next()? {
                None | Some('\n') => break,
                Some('\\') => match self.scanner.next()? {
                    None | Some('\n') => break,
                    Some('n' | 'N') => buf.push('\n'),
                    Some('r') => buf.push('\r'),
                    Some(c) => buf.push(c),
                },
                Some(',') => {
                    if !buf.is_empty() {
                        component.push(std::mem::take(&mut buf));
                    }
                }
                Some(';') => {
                    if !buf.is_empty() {
                        component.push(std::mem::take(&mut buf));
                    }
                    value.push(std::mem::take(&mut component));
                }
                Some(c) => buf.push(c),
            }
        }

        if !buf.is_empty() {
            component.push(buf);
        }
        value.push(component);
        Ok(value)
    }
}

impl<R: BufRead> Iterator for Decoder<R> {
    type Item = DecodeResult<Block>;

    /// Yields blocks until the input is exhausted or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.read_block().transpose();
        if matches!(result, Some(Err(_))) {
            self.failed = true;
        }
        result
    }
}

fn open_block(begin: &Property, line: usize) -> DecodeResult<Block> {
    let profile = begin.text_value();
    if profile.is_empty() {
        return Err(DecodeError::MissingProfile { line });
    }
    Ok(Block::new(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder(input: &str) -> Decoder<&[u8]> {
        Decoder::new(input.as_bytes())
    }

    fn line(input: &str) -> Property {
        decoder(input).read_content_line().unwrap().unwrap()
    }

    #[test]
    fn parse_simple_line() {
        let prop = line("FN:John Doe\r\n");
        assert!(prop.group.is_none());
        assert_eq!(prop.name, "FN");
        assert!(prop.params.is_empty());
        assert_eq!(prop.text_value(), "John Doe");
    }

    #[test]
    fn name_is_uppercased() {
        assert_eq!(line("note:x").name, "NOTE");
    }

    #[test]
    fn parse_grouped_line() {
        let prop = line("item1.TEL:+1-555-555-5555");
        assert_eq!(prop.group.as_deref(), Some("item1"));
        assert_eq!(prop.name, "TEL");
    }

    #[test]
    fn parse_dotted_group() {
        let prop = line("a.b.TEL:1");
        assert_eq!(prop.group.as_deref(), Some("a.b"));
        assert_eq!(prop.name, "TEL");
    }

    #[test]
    fn parse_with_parameters() {
        let prop = line("TEL;TYPE=home,voice;PREF=1:+1-555-555-5555");
        assert_eq!(prop.params.len(), 2);
        assert_eq!(prop.params[0].name, "TYPE");
        assert_eq!(prop.params[0].values, vec!["home", "voice"]);
        assert_eq!(prop.param_value("PREF"), Some("1"));
        assert_eq!(prop.text_value(), "+1-555-555-5555");
    }

    #[test]
    fn repeated_parameters_concatenate() {
        let prop = line("TEL;type=home;PREF=1;TYPE=voice,cell:1");
        assert_eq!(prop.params.len(), 2);
        assert_eq!(prop.params[0].values, vec!["home", "voice", "cell"]);
    }

    #[test]
    fn valueless_parameter() {
        let prop = line("TEL;HOME;VOICE:1");
        assert_eq!(prop.params.len(), 2);
        assert_eq!(prop.params[0].name, "HOME");
        assert!(prop.params[0].values.is_empty());
    }

    #[test]
    fn quoted_parameter_keeps_delimiters() {
        let prop = line("ATTENDEE;DELEGATED-FROM=\"mailto:a@x.org\",\"mailto:b;c@x.org\":mailto:d@x.org");
        let param = prop.param("DELEGATED-FROM").unwrap();
        assert_eq!(param.values, vec!["mailto:a@x.org", "mailto:b;c@x.org"]);
        assert_eq!(prop.text_value(), "mailto:d@x.org");
    }

    #[test]
    fn parameter_newline_escape() {
        let prop = line("ADR;LABEL=\"123 Main St\\nAnytown\":;;123 Main St");
        assert_eq!(prop.param_value("LABEL"), Some("123 Main St\nAnytown"));
    }

    #[test]
    fn backslash_before_closing_quote_is_literal() {
        let prop = line("FN;X-DIR=\"a;b\\\":x");
        assert_eq!(prop.param_value("X-DIR"), Some("a;b\\"));
        assert_eq!(prop.text_value(), "x");
    }

    #[test]
    fn backslash_before_delimiter_is_literal() {
        let prop = line("FN;X-A=one\\,two\\;X-B=c\\d:x");
        assert_eq!(prop.param("X-A").unwrap().values, vec!["one\\", "two\\"]);
        assert_eq!(prop.param_value("X-B"), Some("c\\d"));
    }

    #[test]
    fn colon_in_value() {
        let prop = line("URL:https://example.com:8080/path");
        assert_eq!(prop.text_value(), "https://example.com:8080/path");
    }

    #[test]
    fn structured_value_components() {
        let prop = line("N:Doe;John,Johnny;;Mr.;");
        let comps: Vec<Vec<String>> = prop.value.iter().map(|v| v.0.clone()).collect();
        assert_eq!(
            comps,
            vec![
                vec!["Doe".to_string()],
                vec!["John".to_string(), "Johnny".to_string()],
                vec![],
                vec!["Mr.".to_string()],
                vec![],
            ]
        );
    }

    #[test]
    fn escapes_are_decoded() {
        let prop = line(r"NOTE:a\,b\;c\\d\ne\Nf\rg\:h");
        assert_eq!(prop.text_value(), "a,b;c\\d\ne\nf\rg:h");
        assert_eq!(prop.value.len(), 1);
    }

    #[test]
    fn folded_value_is_joined() {
        let prop = line("DESCRIPTION:This is a lo\r\n ng description\r\n\tthat spans lines\r\n");
        assert_eq!(prop.text_value(), "This is a long descriptionthat spans lines");
    }

    #[test]
    fn empty_value() {
        let prop = line("FN:\r\n");
        assert_eq!(prop.value.len(), 1);
        assert!(prop.value.0[0].is_empty());
    }

    #[test]
    fn missing_colon_is_an_error() {
        let err = decoder("FN John\r\nNOTE:x\r\n").read_content_line().unwrap_err();
        assert!(matches!(err, DecodeError::MissingColon { line: 1, .. }));
    }

    #[test]
    fn whitespace_only_input_is_clean_end() {
        let mut dec = decoder(" \r\n\t\r\n");
        assert!(dec.read_content_line().unwrap().is_none());
        assert!(dec.read_block().unwrap().is_none());
    }

    #[test]
    fn read_simple_block() {
        let block = decoder("BEGIN:VCARD\r\nFN:John Doe\r\nEND:VCARD\r\n")
            .read_block()
            .unwrap()
            .unwrap();
        assert_eq!(block.profile, "VCARD");
        assert_eq!(block.properties.len(), 1);
        assert!(block.blocks.is_empty());
    }

    #[test]
    fn end_profile_compared_case_insensitively() {
        let block = decoder("BEGIN:vcard\r\nEND:VCARD\r\n").read_block().unwrap().unwrap();
        assert_eq!(block.profile, "vcard");
    }

    #[test_log::test]
    fn nested_blocks_two_levels() {
        let input = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:1\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
END:VALARM\r\n\
SUMMARY:after alarm\r\n\
END:VEVENT\r\n\
BEGIN:VTODO\r\n\
UID:2\r\n\
END:VTODO\r\n\
END:VCALENDAR\r\n";
        let cal = decoder(input).read_block().unwrap().unwrap();

        assert_eq!(cal.properties.len(), 1);
        assert_eq!(cal.blocks.len(), 2);

        let event = &cal.blocks[0];
        assert_eq!(event.profile, "VEVENT");
        let names: Vec<&str> = event.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["UID", "SUMMARY"]);
        assert_eq!(event.blocks.len(), 1);
        assert_eq!(event.blocks[0].profile, "VALARM");
        assert_eq!(event.blocks[0].properties[0].text_value(), "DISPLAY");

        assert_eq!(cal.blocks[1].profile, "VTODO");
    }

    #[test]
    fn first_line_must_be_begin() {
        let err = decoder("FN:x\r\nEND:VCARD\r\n").read_block().unwrap_err();
        match err {
            DecodeError::UnexpectedProperty { line, expected, found } => {
                assert_eq!(line, 1);
                assert_eq!(expected, "BEGIN");
                assert_eq!(found, "FN");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn begin_without_profile() {
        let err = decoder("BEGIN:\r\nEND:\r\n").read_block().unwrap_err();
        assert!(matches!(err, DecodeError::MissingProfile { line: 1 }));
    }

    #[test]
    fn truncated_block_is_eof_error() {
        let err = decoder("BEGIN:VCARD\r\nFN:x\r\n").read_block().unwrap_err();
        assert!(err.is_eof());
        assert!(err.to_string().contains("BEGIN:VCARD"));
    }

    #[test]
    fn truncated_nested_block_names_inner_profile() {
        let err = decoder("BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\n")
            .read_block()
            .unwrap_err();
        assert!(err.to_string().contains("BEGIN:VEVENT"));
    }

    #[test]
    fn last_line_without_terminator() {
        let block = decoder("BEGIN:VCARD\r\nFN:x\r\nEND:VCARD").read_block().unwrap().unwrap();
        assert_eq!(block.profile, "VCARD");
    }

    #[test]
    fn consecutive_blocks() {
        let input = "BEGIN:VCARD\r\nFN:A\r\nEND:VCARD\r\n\r\nBEGIN:VCARD\r\nFN:B\r\nEND:VCARD\r\n";
        let names: Vec<String> = decoder(input)
            .map(|b| b.unwrap().properties[0].text_value().to_string())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut dec = decoder("FN:x\r\nBEGIN:VCARD\r\nEND:VCARD\r\n");
        assert!(matches!(dec.next(), Some(Err(_))));
        assert!(dec.next().is_none());
    }

    #[test]
    fn error_line_numbers() {
        let err = decoder("BEGIN:A\r\nX:1\r\nY:2\r\nEND:B\r\n").read_block().unwrap_err();
        assert_eq!(err.line(), Some(4));
    }
}
