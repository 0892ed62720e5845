/// Normalize one text fragment: drop real line breaks and tabs, turn the
/// literal two-character escapes `\n` / `\t` into single spaces, then trim.
///
/// Dropping (not spacing) the real control characters is load-bearing: it is
/// what glues "Registro Electoral" to the "Corte al ..." footer line, which
/// the field splitter relies on as its final label.
///
/// Idempotent: control characters are removed before the escape pass, so a
/// second application never finds new work.
pub fn normalize(value: &str) -> String {
    let without_controls: String = value
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '\t'))
        .collect();
    without_controls
        .replace("\\n", " ")
        .replace("\\t", " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_escapes_become_spaces() {
        assert_eq!(normalize("a\\nb\\tc"), "a b c");
    }

    #[test]
    fn real_controls_are_removed_not_spaced() {
        assert_eq!(normalize("Registro Electoral\nCorte"), "Registro ElectoralCorte");
        assert_eq!(normalize("a\tb\r\nc"), "abc");
    }

    #[test]
    fn trims_both_ends() {
        assert_eq!(normalize("  JUAN PEREZ  "), "JUAN PEREZ");
        assert_eq!(normalize("\\n JUAN \\n"), "JUAN");
    }

    #[test]
    fn empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t\r "), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "a\\nb\\tc",
            "Registro Electoral\nCorte",
            "  JUAN\r\nPEREZ  ",
            "\\\nn",
            "\\\\n",
            "plain text",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {:?}", s);
        }
    }
}
