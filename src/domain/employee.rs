//! Employee domain model.
//!
//! An [`Employee`] is one directory entry as returned by the randomuser.me API.
//! Records are immutable once fetched; the only identifier the plugin uses is
//! the record's position in the fetched list.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One directory entry fetched from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: PersonName,
    pub email: String,
    pub picture: Picture,
    pub cell: String,
    pub dob: DateOfBirth,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Portrait URLs in the three sizes the API serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    /// ISO-8601 timestamp, e.g. `1993-07-20T09:44:18.674Z`.
    pub date: String,
    #[serde(default)]
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub country: String,
    pub postcode: Postcode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// Postal code as delivered by the API.
///
/// US postcodes arrive as JSON numbers, other nationalities as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(u64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Employee {
    /// Returns `"First Last"` with each word capitalized.
    ///
    /// This is the text cards display and the text the search filter matches.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zroster::domain::employee::fixture;
    /// let employee = fixture("anna", "lee");
    /// assert_eq!(employee.display_name(), "Anna Lee");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        capitalize_words(&format!("{} {}", self.name.first, self.name.last))
    }

    /// Returns `"City, State"` as shown on gallery cards.
    #[must_use]
    pub fn city_state(&self) -> String {
        capitalize_words(&format!("{}, {}", self.location.city, self.location.state))
    }

    #[must_use]
    pub fn city(&self) -> String {
        capitalize_words(&self.location.city)
    }

    /// Returns the full postal address shown in the detail view.
    ///
    /// Format: `"<number> <street>., <city>, <state> <postcode>"`.
    #[must_use]
    pub fn address(&self) -> String {
        let loc = &self.location;
        format!(
            "{} {}., {}, {} {}",
            loc.street.number, loc.street.name, loc.city, loc.state, loc.postcode
        )
    }

    /// Formats the date of birth as `MM/DD/YY`.
    ///
    /// Falls back to the raw API value when it is not a valid RFC 3339 timestamp.
    #[must_use]
    pub fn birthday(&self) -> String {
        DateTime::parse_from_rfc3339(&self.dob.date).map_or_else(
            |e| {
                tracing::debug!(date = %self.dob.date, error = %e, "unparseable date of birth");
                self.dob.date.clone()
            },
            |date| date.format("%m/%d/%y").to_string(),
        )
    }
}

/// Uppercases the first letter of every whitespace-separated word.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Builds a deterministic employee for tests and doc examples.
#[doc(hidden)]
#[must_use]
pub fn fixture(first: &str, last: &str) -> Employee {
    Employee {
        name: PersonName {
            title: "Ms".to_string(),
            first: first.to_string(),
            last: last.to_string(),
        },
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        picture: Picture {
            large: format!("https://randomuser.me/api/portraits/women/{}.jpg", first.len()),
            medium: String::new(),
            thumbnail: String::new(),
        },
        cell: "(555) 010-2030".to_string(),
        dob: DateOfBirth {
            date: "1987-03-09T04:12:45.123Z".to_string(),
            age: 37,
        },
        location: Location {
            street: Street {
                number: 4821,
                name: "Lakeview Dr".to_string(),
            },
            city: "springfield".to_string(),
            state: "oregon".to_string(),
            country: "United States".to_string(),
            postcode: Postcode::Number(97_477),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_capitalizes_each_word() {
        let employee = fixture("mary ann", "o'neil");
        assert_eq!(employee.display_name(), "Mary Ann O'neil");
    }

    #[test]
    fn birthday_is_month_day_two_digit_year() {
        let employee = fixture("anna", "lee");
        assert_eq!(employee.birthday(), "03/09/87");
    }

    #[test]
    fn birthday_falls_back_to_raw_value() {
        let mut employee = fixture("anna", "lee");
        employee.dob.date = "sometime in spring".to_string();
        assert_eq!(employee.birthday(), "sometime in spring");
    }

    #[test]
    fn address_joins_street_city_state_and_postcode() {
        let employee = fixture("anna", "lee");
        assert_eq!(
            employee.address(),
            "4821 Lakeview Dr., springfield, oregon 97477"
        );
        assert_eq!(employee.city_state(), "Springfield, Oregon");
    }

    #[test]
    fn postcode_accepts_numbers_and_strings() {
        let number: Postcode = serde_json::from_str("97477").unwrap();
        let text: Postcode = serde_json::from_str("\"T4B 2K9\"").unwrap();
        assert_eq!(number.to_string(), "97477");
        assert_eq!(text.to_string(), "T4B 2K9");
    }

    #[test]
    fn deserializes_api_record() {
        let json = r#"{
            "name": {"title": "Mr", "first": "brad", "last": "gibson"},
            "location": {
                "street": {"number": 9278, "name": "New Road"},
                "city": "kilcoole", "state": "waterford", "country": "Ireland",
                "postcode": "93027",
                "coordinates": {"latitude": "20.9267", "longitude": "-7.9310"}
            },
            "email": "brad.gibson@example.com",
            "dob": {"date": "1993-07-20T09:44:18.674Z", "age": 26},
            "cell": "081-454-0666",
            "picture": {
                "large": "https://randomuser.me/api/portraits/men/75.jpg",
                "medium": "https://randomuser.me/api/portraits/med/men/75.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/men/75.jpg"
            }
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.display_name(), "Brad Gibson");
        assert_eq!(employee.birthday(), "07/20/93");
        assert_eq!(employee.location.postcode, Postcode::Text("93027".to_string()));
    }
}
