//! Block encoder.

use std::io::Write;

use vdir_core::config::CodecConfig;
use vdir_core::constants::{BEGIN, CRLF, DEFAULT_FOLD_WIDTH, END};

use super::error::{EncodeError, EncodeResult};
use super::escape::{escape_char, escape_param_value};
use super::fold::FoldingWriter;
use crate::error::VdirResult;
use crate::rfc::vdir::core::{Block, Property};
use crate::rfc::vdir::map::{Record, to_block};

/// Encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Value characters per physical line before a continuation line starts.
    pub fold_width: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            fold_width: DEFAULT_FOLD_WIDTH,
        }
    }
}

impl From<&CodecConfig> for EncoderOptions {
    fn from(config: &CodecConfig) -> Self {
        Self {
            fold_width: config.fold_width,
        }
    }
}

/// Writes directory blocks to a byte sink.
///
/// Every method returns the first write failure it meets; output written
/// before the failure is not rolled back.
///
/// ```rust
/// use vdir_rfc::rfc::vdir::{Block, Encoder, Property};
///
/// let mut card = Block::new("VCARD");
/// card.add_property(Property::text("FN", "John Doe"));
///
/// let mut encoder = Encoder::new(Vec::new());
/// encoder.write_block(&card).unwrap();
/// assert_eq!(
///     encoder.into_inner(),
///     b"BEGIN:VCARD\r\nFN:John Doe\r\nEND:VCARD\r\n"
/// );
/// ```
pub struct Encoder<W> {
    writer: W,
    options: EncoderOptions,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder with default options.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, EncoderOptions::default())
    }

    #[must_use]
    pub fn with_options(writer: W, options: EncoderOptions) -> Self {
        Self { writer, options }
    }

    #[must_use]
    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    /// Consumes the encoder, returning the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes a block and all of its nested blocks.
    ///
    /// ## Errors
    /// Returns `MissingProfile` if the block or any descendant has no
    /// profile, `EmptyPropertyName`, `QuotedParameter` or `EscapedParameter`
    /// for a property that cannot be represented, all before anything is
    /// written; otherwise the first I/O error.
    #[tracing::instrument(skip_all, fields(profile = %block.profile))]
    pub fn write_block(&mut self, block: &Block) -> EncodeResult<()> {
        check_block(block)?;
        self.emit_block(block)?;
        self.writer.flush()?;
        tracing::debug!("Block encoded");
        Ok(())
    }

    /// Writes a single content line.
    ///
    /// ## Errors
    /// Returns `EmptyPropertyName`, `QuotedParameter` or `EscapedParameter`
    /// before writing, or the first I/O error.
    pub fn write_content_line(&mut self, prop: &Property) -> EncodeResult<()> {
        check_property(prop)?;
        self.emit_property(prop)
    }

    /// Maps `record` onto a block and writes it.
    ///
    /// ## Errors
    /// Returns a mapping error if the record's layout is unsupported, or an
    /// encode error as [`Encoder::write_block`] does.
    pub fn encode(&mut self, record: &dyn Record) -> VdirResult<()> {
        let block = to_block(record)?;
        self.write_block(&block)?;
        Ok(())
    }

    fn emit_block(&mut self, block: &Block) -> EncodeResult<()> {
        self.emit_property(&Property::text(BEGIN, block.profile.as_str()))?;
        for prop in &block.properties {
            self.emit_property(prop)?;
        }
        for child in &block.blocks {
            self.emit_block(child)?;
        }
        self.emit_property(&Property::text(END, block.profile.as_str()))
    }

    fn emit_property(&mut self, prop: &Property) -> EncodeResult<()> {
        let w = &mut self.writer;
        if let Some(group) = &prop.group {
            write!(w, "{group}.")?;
        }
        w.write_all(prop.name.as_bytes())?;

        for param in &prop.params {
            write!(w, ";{}", param.name)?;
            for (i, value) in param.values.iter().enumerate() {
                let sep = if i == 0 { "=" } else { "," };
                write!(w, "{sep}{}", escape_param_value(value))?;
            }
        }
        w.write_all(b":")?;

        let mut folding = FoldingWriter::new(w, self.options.fold_width);
        for (ci, component) in prop.value.iter().enumerate() {
            if ci > 0 {
                folding.write_unit(";")?;
            }
            for (vi, text) in component.iter().enumerate() {
                if vi > 0 {
                    folding.write_unit(",")?;
                }
                for c in text.chars() {
                    match escape_char(c) {
                        Some(seq) => folding.write_unit(seq)?,
                        None => folding.write_char(c)?,
                    }
                }
            }
        }

        self.writer.write_all(CRLF.as_bytes())?;
        Ok(())
    }
}

fn check_block(block: &Block) -> EncodeResult<()> {
    if block.profile.is_empty() {
        return Err(EncodeError::MissingProfile);
    }
    for prop in &block.properties {
        check_property(prop)?;
    }
    block.blocks.iter().try_for_each(check_block)
}

fn check_property(prop: &Property) -> EncodeResult<()> {
    if prop.name.is_empty() {
        return Err(EncodeError::EmptyPropertyName);
    }
    for param in &prop.params {
        if param.values.iter().any(|v| v.contains('"')) {
            return Err(EncodeError::QuotedParameter {
                property: prop.name.clone(),
                parameter: param.name.clone(),
            });
        }
        // `\n` in a parameter value always reads back as a newline.
        if param.values.iter().any(|v| v.contains(r"\n") || v.contains(r"\N")) {
            return Err(EncodeError::EscapedParameter {
                property: prop.name.clone(),
                parameter: param.name.clone(),
            });
        }
    }
    Ok(())
}
