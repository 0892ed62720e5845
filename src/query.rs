use std::fmt;

use serde::Serialize;

use crate::error::LookupError;

/// Nationality flag as printed on the cedula: V for Venezuelan-born,
/// E for foreign resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Nationality {
    V,
    E,
}

impl Nationality {
    /// Accepts a single letter, either case. Anything else is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "V" | "v" => Some(Self::V),
            "E" | "e" => Some(Self::E),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V => "V",
            Self::E => "E",
        }
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated registry query. Construction is the only validation gate;
/// the fetcher and parser assume the invariants hold.
#[derive(Debug, Clone)]
pub struct Query {
    pub nationality: Nationality,
    pub id_number: String,
}

impl Query {
    pub fn new(nationality: &str, id_number: &str) -> Result<Self, LookupError> {
        let nationality =
            Nationality::parse(nationality).ok_or(LookupError::InvalidNationality)?;
        if id_number.is_empty() {
            return Err(LookupError::MissingId);
        }
        if !id_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LookupError::InvalidIdFormat);
        }
        Ok(Self {
            nationality,
            id_number: id_number.to_string(),
        })
    }
}
