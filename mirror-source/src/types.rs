//! Probes over C# type tokens.

/// Collection-family names that mark a member as an array.
pub const COLLECTION_NAMES: &[&str] = &[
    "ICollection",
    "IEnumerable",
    "Array",
    "Enumerable",
    "Collection",
    "List",
];

/// True if the type token is an array or a collection wrapper.
pub fn is_array_type(token: &str) -> bool {
    token.contains("[]") || COLLECTION_NAMES.iter().any(|name| token.contains(name))
}

/// True if the type token is nullable (`int?`).
pub fn is_optional_type(token: &str) -> bool {
    token.contains('?')
}

/// Strip nullable markers, array brackets and a generic wrapper, leaving the
/// element type name (`ICollection<Part>` -> `Part`, `int?[]` -> `int`).
pub fn clean_type(token: &str) -> String {
    let bare = token.replace('?', "").replace("[]", "");

    match (bare.find('<'), bare.rfind('>')) {
        (Some(open), Some(close)) if open < close => bare[open + 1..close].to_string(),
        _ => bare.replace(['<', '>'], ""),
    }
}
