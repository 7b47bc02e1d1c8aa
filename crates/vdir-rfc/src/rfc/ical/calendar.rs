//! Calendar records.

use serde::{Deserialize, Serialize};

use crate::record;

record! {
    /// A VCALENDAR object and its components.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Calendar {
        pub profile: String => ("VCALENDAR", profile),
        pub version: String,
        pub prodid: String,
        pub method: String,
        pub timezones: Vec<Timezone> => ("VTIMEZONE", object),
        pub events: Vec<Event> => ("VEVENT", object),
        pub todos: Vec<Todo> => ("VTODO", object),
        pub journals: Vec<Journal> => ("VJOURNAL", object),
        pub free_busy: Vec<FreeBusy> => ("VFREEBUSY", object),
    }
}

record! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Event {
        pub profile: String => ("VEVENT", profile),
        pub uid: String,
        pub dtstamp: DateTimeValue,
        pub organizer: Person,
        pub dtstart: DateTimeValue,
        pub dtend: DateTimeValue,
        pub duration: String,
        pub location: String,
        pub summary: String,
        pub categories: Vec<String>,
        pub description: String,
        pub status: String,
        pub class: String,
        pub sequence: String,
        pub created: String,
        pub last_modified: String => "LAST-MODIFIED",
        pub attendees: Vec<Person> => "ATTENDEE",
        pub rrule: RecurrenceRule,
        pub alarms: Vec<Alarm> => ("VALARM", object),
    }
}

record! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Todo {
        pub profile: String => ("VTODO", profile),
        pub uid: String,
        pub dtstamp: DateTimeValue,
        pub sequence: String,
        pub due: DateTimeValue,
        pub status: String,
        pub summary: String,
        pub priority: String,
        pub percent_complete: String => "PERCENT-COMPLETE",
        pub alarms: Vec<Alarm> => ("VALARM", object),
    }
}

record! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Journal {
        pub profile: String => ("VJOURNAL", profile),
        pub uid: String,
        pub dtstamp: DateTimeValue,
        pub organizer: Person,
        pub status: String,
        pub class: String,
        pub categories: Vec<String>,
        pub description: String,
    }
}

record! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct FreeBusy {
        pub profile: String => ("VFREEBUSY", profile),
        pub uid: String,
        pub organizer: Person,
        pub dtstart: DateTimeValue,
        pub dtend: DateTimeValue,
        pub periods: Vec<String> => ("FREEBUSY", multiple),
        pub url: String,
    }
}

record! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Timezone {
        pub profile: String => ("VTIMEZONE", profile),
        pub tzid: String,
        pub standard: Vec<TimezoneRule> => ("STANDARD", object),
        pub daylight: Vec<TimezoneRule> => ("DAYLIGHT", object),
    }
}

record! {
    /// A STANDARD or DAYLIGHT observance. The profile is filled in from the
    /// field that holds the rule.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct TimezoneRule {
        pub dtstart: String,
        pub tzoffset_from: String => "TZOFFSETFROM",
        pub tzoffset_to: String => "TZOFFSETTO",
        pub tzname: String,
        pub rrule: RecurrenceRule,
    }
}

record! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Alarm {
        pub profile: String => ("VALARM", profile),
        pub action: String,
        pub trigger: String,
        pub description: String,
        pub repeat: String,
        pub duration: String,
    }
}

record! {
    /// A calendar user (`ORGANIZER`, `ATTENDEE`).
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Person {
        pub common_name: String => ("CN", param),
        pub role: String => (param),
        pub partstat: String => (param),
        pub address: String,
    }
}

record! {
    /// A date or date-time with its `TZID` and `VALUE` parameters.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct DateTimeValue {
        pub tzid: String => (param),
        pub value_type: String => ("VALUE", param),
        pub value: String,
    }
}

record! {
    /// `RRULE` parts, one per `;`-separated component.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct RecurrenceRule {
        pub rule1: Vec<String>,
        pub rule2: Vec<String>,
        pub rule3: Vec<String>,
        pub rule4: Vec<String>,
        pub rule5: Vec<String>,
    }
}

impl Calendar {
    /// Creates an empty iCalendar 2.0 object.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        Self {
            version: "2.0".to_string(),
            prodid: prodid.into(),
            ..Self::default()
        }
    }

    /// Returns the event with the given UID.
    #[must_use]
    pub fn event(&self, uid: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.uid == uid)
    }
}

impl RecurrenceRule {
    /// Returns the rule parts, e.g. `["FREQ=WEEKLY", "BYDAY=MO,WE"]`.
    #[must_use]
    pub fn parts(&self) -> Vec<String> {
        [&self.rule1, &self.rule2, &self.rule3, &self.rule4, &self.rule5]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.join(","))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vdir::{Decoder, marshal, unmarshal};

    const CALENDAR: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar 1.0//EN\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Berlin\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:19700329T020000\r\n\
TZOFFSETFROM:+0100\r\n\
TZOFFSETTO:+0200\r\n\
TZNAME:CEST\r\n\
RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU\r\n\
END:DAYLIGHT\r\n\
BEGIN:STANDARD\r\n\
DTSTART:19701025T030000\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
TZNAME:CET\r\n\
RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
UID:planning@example.com\r\n\
DTSTAMP:20240301T120000Z\r\n\
ORGANIZER;CN=Alice:mailto:alice@example.com\r\n\
DTSTART;TZID=Europe/Berlin:20240305T100000\r\n\
DTEND;TZID=Europe/Berlin:20240305T110000\r\n\
SUMMARY:Planning\r\n\
ATTENDEE;CN=Bob;ROLE=REQ-PARTICIPANT;PARTSTAT=ACCEPTED:mailto:bob@example.com\r\n\
ATTENDEE;CN=Carol;PARTSTAT=TENTATIVE:mailto:carol@example.com\r\n\
RRULE:FREQ=WEEKLY;BYDAY=TU,TH;COUNT=10\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT10M\r\n\
DESCRIPTION:Planning soon\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
BEGIN:VTODO\r\n\
UID:todo-1@example.com\r\n\
DUE;VALUE=DATE:20240310\r\n\
SUMMARY:Write agenda\r\n\
END:VTODO\r\n\
BEGIN:VFREEBUSY\r\n\
FREEBUSY:20240305T090000Z/20240305T100000Z,20240306T090000Z/PT1H\r\n\
FREEBUSY:20240307T090000Z/PT30M\r\n\
END:VFREEBUSY\r\n\
END:VCALENDAR\r\n";

    #[test_log::test]
    fn decode_calendar() {
        let cal: Calendar = unmarshal(CALENDAR).unwrap();

        assert_eq!(cal.version, "2.0");
        assert_eq!(cal.timezones[0].tzid, "Europe/Berlin");
        assert_eq!(cal.timezones[0].daylight[0].tzname, "CEST");
        assert_eq!(cal.timezones[0].standard[0].tzoffset_to, "+0100");
        assert_eq!(
            cal.timezones[0].standard[0].rrule.parts(),
            vec!["FREQ=YEARLY", "BYMONTH=10", "BYDAY=-1SU"]
        );

        let event = cal.event("planning@example.com").unwrap();
        assert_eq!(event.organizer.common_name, "Alice");
        assert_eq!(event.organizer.address, "mailto:alice@example.com");
        assert_eq!(event.dtstart.tzid, "Europe/Berlin");
        assert_eq!(event.dtstart.value, "20240305T100000");
        assert_eq!(event.attendees.len(), 2);
        assert_eq!(event.attendees[1].partstat, "TENTATIVE");
        assert_eq!(event.rrule.parts(), vec!["FREQ=WEEKLY", "BYDAY=TU,TH", "COUNT=10"]);
        assert_eq!(event.alarms[0].trigger, "-PT10M");

        assert_eq!(cal.todos[0].due.value_type, "DATE");
        assert_eq!(cal.free_busy[0].periods.len(), 3);
        assert!(cal.journals.is_empty());
    }

    #[test]
    fn calendar_round_trip() {
        let cal: Calendar = unmarshal(CALENDAR).unwrap();
        let again: Calendar = unmarshal(&marshal(&cal).unwrap()).unwrap();
        assert_eq!(again, cal);
    }

    #[test]
    fn timezone_rules_keep_their_profiles() {
        let cal: Calendar = unmarshal(CALENDAR).unwrap();
        let text = marshal(&cal).unwrap();
        let block = Decoder::new(text.as_bytes()).read_block().unwrap().unwrap();

        let timezone = block.blocks_of("VTIMEZONE")[0];
        let rules: Vec<&str> = timezone.blocks.iter().map(|b| b.profile.as_str()).collect();
        assert_eq!(rules, vec!["STANDARD", "DAYLIGHT"]);
    }

    #[test]
    fn new_calendar_encodes_header() {
        let text = marshal(&Calendar::new("-//vdir//EN")).unwrap();
        assert_eq!(
            text,
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//vdir//EN\r\nEND:VCALENDAR\r\n"
        );
    }
}
