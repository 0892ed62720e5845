use std::sync::LazyLock;

use regex::Regex;

use super::text::normalize;

/// Labels the registry page prints before each value, replaced (in this
/// order) by the field delimiter. Order matters: each label is replaced
/// across the whole document before the next is considered. A label that
/// happens to occur as a substring of ordinary text is replaced too; that
/// fragility is part of the positional contract and is kept as-is.
pub const LABELS: &[&str] = &[
    "Cédula:",
    "Nombre:",
    "Estado:",
    "Municipio:",
    "Parroquia:",
    "Centro:",
    "Dirección:",
    "SERVICIO ELECTORAL",
    "Registro ElectoralCorte",
];

const DELIM: char = '|';

// Positional contract over the split result. Index 0 is a page-header
// fragment, index 1 the raw cedula echo, index 8 a footer artifact.
pub const IDX_FULL_NAME: usize = 2;
pub const IDX_STATE: usize = 3;
pub const IDX_MUNICIPALITY: usize = 4;
pub const IDX_PARISH: usize = 5;
pub const IDX_VOTING_CENTER: usize = 6;
pub const IDX_ADDRESS: usize = 7;

static LABEL_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    LABELS
        .iter()
        .map(|label| Regex::new(&format!("(?i){}", regex::escape(label))).unwrap())
        .collect()
});

/// Replace every label with the delimiter, then split. Leading and trailing
/// delimiters are trimmed together with whitespace, so a document that ends
/// at the final label splits into exactly nine segments. Each segment is
/// normalized independently.
pub fn split_fields(text: &str) -> Vec<String> {
    let mut replaced = text.to_string();
    for re in LABEL_RES.iter() {
        replaced = re.replace_all(&replaced, "|").into_owned();
    }
    replaced
        .trim_matches(|c: char| c == DELIM || c.is_whitespace())
        .split(DELIM)
        .map(normalize)
        .collect()
}
