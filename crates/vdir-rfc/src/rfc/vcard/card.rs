//! Contact records.

use serde::{Deserialize, Serialize};

use crate::record;

record! {
    /// A vCard.
    ///
    /// Besides the RFC 6350 properties this carries the instant messaging and
    /// vendor extensions written by common address book clients.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Card {
        pub profile: String => ("VCARD", profile),
        pub version: String,
        pub formatted_name: String => "FN",
        pub name: Name => "N",
        pub nickname: Vec<String>,
        pub birthday: String => "BDAY",
        pub anniversary: String,
        pub addresses: Vec<Address> => "ADR",
        pub labels: Vec<TypedValue> => "LABEL",
        pub telephones: Vec<TypedValue> => "TEL",
        pub emails: Vec<TypedValue> => "EMAIL",
        pub urls: Vec<TypedValue> => "URL",
        pub related: Vec<TypedValue>,
        pub calendar_dates: Vec<CalendarDate> => "CDAY",
        pub title: String,
        pub role: String,
        pub org: String,
        pub categories: Vec<String>,
        pub note: String,
        pub photo: Photo,
        pub rev: String,
        pub prodid: String,
        pub uid: String,

        pub icq: String => "X-ICQ",
        pub skype: String => "X-SKYPE",
        pub aim: String => "X-AIM",
        pub jabber: String => "X-JABBER",
        pub impp: Vec<Impp>,

        pub sensitivity: String,
        pub folder: String,
        pub gender: String => "X-WAB-GENDER",
        pub display_name: String => "DISPLAY-NAME",
        pub self_url: String => "SELFURL",
        pub starred: String,
        pub short_name: String => "SHORT-NAME",
        pub is_share: String => "ISSHARE",
        pub br_interval: String => "BR-INTERVAL",
        pub ar_interval: String => "AR-INTERVAL",
        pub is_remind: String => "ISREMIND",
    }
}

record! {
    /// Structured name (`N`).
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Name {
        pub family_names: Vec<String>,
        pub given_names: Vec<String>,
        pub additional_names: Vec<String>,
        pub honorific_prefixes: Vec<String>,
        pub honorific_suffixes: Vec<String>,
    }
}

record! {
    /// Delivery address (`ADR`).
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Address {
        pub types: Vec<String> => ("TYPE", param),
        pub label: String => (param),
        pub post_office_box: String,
        pub extended_address: String,
        pub street: String,
        pub locality: String,
        pub region: String,
        pub postal_code: String,
        pub country_name: String,
    }
}

record! {
    /// A value qualified by `TYPE` parameters, e.g. `TEL;TYPE=home:...`.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct TypedValue {
        pub types: Vec<String> => ("TYPE", param),
        pub value: String,
    }
}

record! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Photo {
        pub encoding: String => (param),
        pub media_type: String => ("MEDIATYPE", param),
        pub kind: String => ("TYPE", param),
        pub value_type: String => ("VALUE", param),
        pub data: String,
    }
}

record! {
    /// Instant messaging address (`IMPP`).
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Impp {
        pub types: Vec<String> => ("TYPE", param),
        pub service_type: String => ("X-SERVICE-TYPE", param),
        pub value: String,
    }
}

record! {
    /// A remembered date with reminder settings (`CDAY`).
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct CalendarDate {
        pub types: Vec<String> => ("TYPE", param),
        pub label: String => (param),
        pub date: String,
        pub is_lunar: String,
        pub is_remind: String,
        pub remind_content: String,
    }
}

impl Card {
    /// Creates an empty vCard 4.0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: "4.0".to_string(),
            ..Self::default()
        }
    }

    /// Returns the formatted name, if set.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        Some(self.formatted_name.as_str()).filter(|s| !s.is_empty())
    }

    /// Returns the preferred email address: the first one typed `pref`, or
    /// else the first one.
    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|e| e.types.iter().any(|t| t.eq_ignore_ascii_case("pref")))
            .or_else(|| self.emails.first())
            .map(|e| e.value.as_str())
    }
}
