//! Text and parameter value escaping.

use std::borrow::Cow;

/// Returns the escape sequence for `c` inside a property value, or `None` if
/// the character is written as-is.
#[must_use]
pub fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '\\' => Some(r"\\"),
        '\r' => Some(r"\r"),
        '\n' => Some(r"\n"),
        ';' => Some(r"\;"),
        ',' => Some(r"\,"),
        _ => None,
    }
}

/// Formats a parameter value.
///
/// Values containing `:`, `;` or `,` are wrapped in double quotes and
/// newlines are written as `\n`. A double quote cannot be represented and
/// must be rejected by the caller beforehand.
#[must_use]
pub fn escape_param_value(s: &str) -> Cow<'_, str> {
    let quoted = s.contains([':', ';', ',']);
    let has_newline = s.contains('\n');
    if !quoted && !has_newline {
        return Cow::Borrowed(s);
    }

    let body = if has_newline {
        Cow::Owned(s.replace('\n', r"\n"))
    } else {
        Cow::Borrowed(s)
    };
    if quoted {
        Cow::Owned(format!("\"{body}\""))
    } else {
        body
    }
}
