//! iCalendar records (RFC 5545).
//!
//! Values are kept as text. Dates, durations and recurrence rules are not
//! interpreted.
//!
//! ## Usage
//!
//! ```rust
//! use vdir_rfc::rfc::ical::Calendar;
//! use vdir_rfc::rfc::vdir::unmarshal;
//!
//! let input = "\
//! BEGIN:VCALENDAR\r\n\
//! VERSION:2.0\r\n\
//! BEGIN:VEVENT\r\n\
//! UID:1@example.com\r\n\
//! DTSTART;VALUE=DATE:20240101\r\n\
//! SUMMARY:New Year\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n";
//!
//! let cal: Calendar = unmarshal(input).unwrap();
//! let event = cal.event("1@example.com").unwrap();
//! assert_eq!(event.summary, "New Year");
//! assert_eq!(event.dtstart.value_type, "DATE");
//! ```

mod calendar;

pub use calendar::{
    Alarm, Calendar, DateTimeValue, Event, FreeBusy, Journal, Person, RecurrenceRule, Timezone,
    TimezoneRule, Todo,
};
