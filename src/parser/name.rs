/// Split a full name into (first, last) purely by token count:
///
/// - 2 tokens: one given name, one surname
/// - 3 tokens: two given names, one surname
/// - 4 tokens: two given names, two surnames
/// - anything else: cut at round(n/2), with .5 rounding away from zero
///   (so 5 tokens put 3 in the given names)
///
/// The heuristic knows nothing about real name grammar; it is deterministic
/// over token count and nothing more.
pub fn split_name(full_name: &str) -> (String, String) {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    match tokens.len() {
        2 => (tokens[0].to_string(), tokens[1].to_string()),
        3 => (tokens[..2].join(" "), tokens[2].to_string()),
        4 => (tokens[..2].join(" "), tokens[2..].join(" ")),
        n => {
            let mid = n.div_ceil(2);
            (tokens[..mid].join(" "), tokens[mid..].join(" "))
        }
    }
}
