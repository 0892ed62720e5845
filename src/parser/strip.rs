use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Entities the CNE page actually emits. `&amp;` goes last so it cannot
/// manufacture new entities.
const ENTITIES: &[(&str, &str)] = &[
    ("&aacute;", "á"),
    ("&eacute;", "é"),
    ("&iacute;", "í"),
    ("&oacute;", "ó"),
    ("&uacute;", "ú"),
    ("&Aacute;", "Á"),
    ("&Eacute;", "É"),
    ("&Iacute;", "Í"),
    ("&Oacute;", "Ó"),
    ("&Uacute;", "Ú"),
    ("&ntilde;", "ñ"),
    ("&Ntilde;", "Ñ"),
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&amp;", "&"),
];

/// Strip markup from an HTML body, leaving plain text. Script and style
/// blocks are dropped wholesale; remaining tags are removed in place, so
/// text on either side of a tag is joined without a separator.
pub fn strip_tags(html: &str) -> String {
    let no_script = SCRIPT_RE.replace_all(html, "");
    let no_style = STYLE_RE.replace_all(&no_script, "");
    let text = TAG_RE.replace_all(&no_style, "");
    decode_entities(&text)
}

fn decode_entities(text: &str) -> String {
    let mut out = text.to_string();
    for (entity, replacement) in ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, replacement);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_tags_in_place() {
        assert_eq!(strip_tags("<b>Nombre:</b>JUAN"), "Nombre:JUAN");
        assert_eq!(strip_tags("a<br/>b"), "ab");
    }

    #[test]
    fn drops_script_and_style_bodies() {
        let html = "<script type=\"text/javascript\">var x = '<b>';</script>visible\
                    <style>td { color: red; }</style>";
        assert_eq!(strip_tags(html), "visible");
    }

    #[test]
    fn decodes_spanish_entities() {
        assert_eq!(strip_tags("C&eacute;dula:"), "Cédula:");
        assert_eq!(strip_tags("Direcci&oacute;n:"), "Dirección:");
        assert_eq!(strip_tags("&Ntilde;ANGA"), "ÑANGA");
    }

    #[test]
    fn amp_decoded_last() {
        // &amp;eacute; must yield the literal text "&eacute;", not "é"
        assert_eq!(strip_tags("&amp;eacute;"), "&eacute;");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(strip_tags("REGISTRO ELECTORAL"), "REGISTRO ELECTORAL");
    }
}
