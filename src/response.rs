use serde::Serialize;

use crate::error::LookupError;
use crate::parser::PersonRecord;
use crate::query::Nationality;

pub const API_NAME: &str = "cedulave";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire form of a registered citizen, field names fixed by the API contract.
#[derive(Debug, Serialize)]
pub struct PersonData {
    pub nac: Nationality,
    pub dni: String,
    pub name: String,
    pub lastname: String,
    pub fullname: String,
    pub state: String,
    pub municipality: String,
    pub parish: String,
    pub voting: String,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessEnvelope {
    pub status: u16,
    pub api: &'static str,
    pub version: &'static str,
    pub data: PersonData,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
}

/// Either a fully-populated success or an error descriptor; never partial.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success(SuccessEnvelope),
    Error(ErrorEnvelope),
}

impl Envelope {
    pub fn success(record: PersonRecord) -> Self {
        Self::Success(SuccessEnvelope {
            status: 200,
            api: API_NAME,
            version: API_VERSION,
            data: PersonData {
                nac: record.nationality,
                dni: record.id_number,
                name: record.first_name,
                lastname: record.last_name,
                fullname: record.full_name,
                state: record.state,
                municipality: record.municipality,
                parish: record.parish,
                voting: record.voting_center,
                address: record.address,
            },
        })
    }

    pub fn error(err: &LookupError) -> Self {
        Self::Error(ErrorEnvelope {
            status: err.status(),
            code: err.code(),
            message: err.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Terminal rendering when JSON was not requested.
    pub fn render_plain(&self) -> String {
        match self {
            Self::Success(s) => {
                let d = &s.data;
                let rows = [
                    ("Nationality", d.nac.as_str()),
                    ("Id number", d.dni.as_str()),
                    ("First name", d.name.as_str()),
                    ("Last name", d.lastname.as_str()),
                    ("Full name", d.fullname.as_str()),
                    ("State", d.state.as_str()),
                    ("Municipality", d.municipality.as_str()),
                    ("Parish", d.parish.as_str()),
                    ("Voting center", d.voting.as_str()),
                    ("Address", d.address.as_str()),
                ];
                rows.iter()
                    .map(|(label, value)| format!("{:<14} {}", format!("{}:", label), value))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Self::Error(e) => format!("Error {} ({}): {}", e.status, e.code, e.message),
        }
    }
}
