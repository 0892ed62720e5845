pub mod fields;
pub mod name;
pub mod strip;
pub mod text;

use crate::error::LookupError;
use crate::query::{Nationality, Query};

const PRESENT_MARKER: &str = "REGISTRO ELECTORAL";
const WARNING_MARKER: &str = "ADVERTENCIA";

/// Field values extracted from one registry page, all populated.
#[derive(Debug, Clone)]
pub struct PersonRecord {
    pub nationality: Nationality,
    pub id_number: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub state: String,
    pub municipality: String,
    pub parish: String,
    pub voting_center: String,
    pub address: String,
}

/// True when the stripped page text carries a registered record: the
/// registry banner must be present and the not-found warning absent.
pub fn record_present(stripped: &str) -> bool {
    let upper = stripped.to_uppercase();
    upper.contains(PRESENT_MARKER) && !upper.contains(WARNING_MARKER)
}

/// Full pipeline over one fetched body: strip markup, normalize, check the
/// existence markers, split on the labels and assign fields by position.
pub fn parse_document(query: &Query, body: &str) -> Result<PersonRecord, LookupError> {
    let stripped = text::normalize(&strip::strip_tags(body));
    if !record_present(&stripped) {
        return Err(LookupError::NotFound);
    }

    let segments = fields::split_fields(&stripped);
    let full_name = segment(&segments, fields::IDX_FULL_NAME)?;
    let (first_name, last_name) = name::split_name(&full_name);

    Ok(PersonRecord {
        nationality: query.nationality,
        id_number: query.id_number.clone(),
        first_name,
        last_name,
        full_name,
        state: segment(&segments, fields::IDX_STATE)?,
        municipality: segment(&segments, fields::IDX_MUNICIPALITY)?,
        parish: segment(&segments, fields::IDX_PARISH)?,
        voting_center: segment(&segments, fields::IDX_VOTING_CENTER)?,
        address: segment(&segments, fields::IDX_ADDRESS)?,
    })
}

fn segment(segments: &[String], idx: usize) -> Result<String, LookupError> {
    segments.get(idx).cloned().ok_or_else(|| {
        LookupError::Unknown(format!(
            "registry page split into {} segments, needed index {}",
            segments.len(),
            idx
        ))
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn present_when_banner_and_no_warning() {
        assert!(record_present("... Registro Electoral de Venezuela ..."));
        assert!(record_present("REGISTRO ELECTORAL"));
    }

    #[test]
    fn absent_when_warning_shown() {
        assert!(!record_present("REGISTRO ELECTORAL ... ADVERTENCIA ..."));
        assert!(!record_present("registro electoral advertencia"));
    }

    #[test]
    fn absent_without_banner() {
        assert!(!record_present("pagina sin datos"));
        assert!(!record_present(""));
    }

    #[test]
    fn registered_fixture_yields_full_record() {
        let query = Query::new("V", "12345678").unwrap();
        let record = parse_document(&query, &fixture("registered")).unwrap();

        assert_eq!(record.nationality, Nationality::V);
        assert_eq!(record.id_number, "12345678");
        assert_eq!(record.full_name, "JUAN CARLOS PEREZ GOMEZ");
        assert_eq!(record.first_name, "JUAN CARLOS");
        assert_eq!(record.last_name, "PEREZ GOMEZ");
        assert_eq!(record.state, "EDO. MIRANDA");
        assert_eq!(record.municipality, "MP. CHACAO");
        assert_eq!(record.parish, "CM. CHACAO");
        assert_eq!(record.voting_center, "UNIDAD EDUCATIVA ANDRES BELLO");
        assert_eq!(record.address, "AV. FRANCISCO DE MIRANDA. CHACAO");
    }

    #[test]
    fn not_found_fixture_is_rejected() {
        let query = Query::new("V", "99999999").unwrap();
        let err = parse_document(&query, &fixture("not_found")).unwrap_err();
        assert_eq!(err.code(), "not-found");
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn truncated_document_falls_back_to_unknown() {
        // Banner present but the labels never appear: the split cannot
        // reach the positional indices.
        let query = Query::new("V", "12345678").unwrap();
        let err = parse_document(&query, "<b>REGISTRO ELECTORAL</b>").unwrap_err();
        assert_eq!(err.code(), "unknown");
        assert_eq!(err.status(), 500);
    }
}
