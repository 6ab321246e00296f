//! Parsing of the comma-delimited identity (GECOS) field.

use serde::{Deserialize, Serialize};

use crate::fields;

/// Length of a raw phone number that gets the `AAA-BBB-CCCC` layout.
const PHONE_DIGITS: usize = 10;

/// Contact fields taken from an account's identity field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub full_name: String,
    pub office_location: String,
    pub office_phone: String,
}

/// Splits an identity field into full name, office location and phone.
///
/// Segments are positional: the first comma-delimited segment is the name,
/// the second the office, the third the phone. Segments past the third are
/// ignored and absent ones are empty.
pub fn parse_identity(field: &str) -> Identity {
    let field = fields::bounded(field, fields::IDENTITY);
    let mut segments = field.splitn(4, ',');
    let mut next = || segments.next().unwrap_or_default();

    let full_name = fields::bounded(next(), fields::FULL_NAME);
    let office_location = fields::bounded(next(), fields::OFFICE_LOCATION);
    let office_phone = fields::bounded(&format_phone(next()), fields::OFFICE_PHONE);

    Identity {
        full_name,
        office_location,
        office_phone,
    }
}

/// Lays out a ten character phone number as `AAA-BBB-CCCC`.
///
/// The characters are not checked to be digits. Any other length is
/// returned unchanged.
pub fn format_phone(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() != PHONE_DIGITS {
        return raw.to_string();
    }

    let area: String = chars[..3].iter().collect();
    let exchange: String = chars[3..6].iter().collect();
    let line: String = chars[6..].iter().collect();
    format!("{area}-{exchange}-{line}")
}
