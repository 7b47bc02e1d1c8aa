//! JSON bridge for vCard and iCalendar records.
//!
//! Converts directory text to the JSON form of a record and back. JSON keys
//! are the record field names; missing keys take their default.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::VdirResult;
use crate::rfc::ical::Calendar;
use crate::rfc::vcard::Card;
use crate::rfc::vdir::{EncoderOptions, Record, marshal_with, unmarshal};

/// Decodes the first block of `text` as a `T` and serializes it to JSON.
///
/// ## Errors
/// Returns a decode or mapping error, or a JSON error.
#[tracing::instrument(skip_all, fields(len = text.len()))]
pub fn to_json<T>(text: &str) -> VdirResult<String>
where
    T: Record + Serialize + Default,
{
    let record: T = unmarshal(text)?;
    let json = serde_json::to_string(&record)?;
    tracing::debug!("Converted block to JSON");
    Ok(json)
}

/// Parses JSON as a `T` and encodes it as directory text.
///
/// ## Errors
/// Returns a JSON error, or a mapping or encode error.
pub fn from_json<T>(json: &str) -> VdirResult<String>
where
    T: Record + DeserializeOwned,
{
    from_json_with::<T>(json, EncoderOptions::default())
}

/// Like [`from_json`], with explicit encoder options.
///
/// ## Errors
/// Returns a JSON error, or a mapping or encode error.
#[tracing::instrument(skip_all, fields(len = json.len(), fold_width = options.fold_width))]
pub fn from_json_with<T>(json: &str, options: EncoderOptions) -> VdirResult<String>
where
    T: Record + DeserializeOwned,
{
    let record: T = serde_json::from_str(json)?;
    let text = marshal_with(&record, options)?;
    tracing::debug!("Converted JSON to block");
    Ok(text)
}

/// ## Errors
/// See [`to_json`].
pub fn card_to_json(text: &str) -> VdirResult<String> {
    to_json::<Card>(text)
}

/// ## Errors
/// See [`from_json`].
pub fn json_to_card(json: &str) -> VdirResult<String> {
    from_json::<Card>(json)
}

/// ## Errors
/// See [`to_json`].
pub fn calendar_to_json(text: &str) -> VdirResult<String> {
    to_json::<Calendar>(text)
}

/// ## Errors
/// See [`from_json`].
pub fn json_to_calendar(json: &str) -> VdirResult<String> {
    from_json::<Calendar>(json)
}
