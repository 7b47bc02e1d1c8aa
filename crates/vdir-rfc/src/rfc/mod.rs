pub mod ical;
pub mod json;
pub mod vcard;
pub mod vdir;
