//! Line-level scanning of C# declarations.
//!
//! The parser never looks at characters directly; it works on the token
//! sequences produced here.

/// Modifiers dropped by [`tokenize`]; they carry no shape information.
pub const IGNORED_MODIFIERS: &[&str] = &["public", "static", "const", "readonly"];

/// Return the part of `line` before the first `//` comment marker.
pub fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Split a line into whitespace-delimited tokens.
///
/// Whitespace around commas is collapsed first (`a , b` becomes `a,b`), and
/// standalone [`IGNORED_MODIFIERS`] are removed.
pub fn tokenize(line: &str) -> Vec<String> {
    collapse_commas(line)
        .split_whitespace()
        .filter(|token| !IGNORED_MODIFIERS.contains(token))
        .map(str::to_string)
        .collect()
}

fn collapse_commas(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut after_comma = false;

    for c in line.chars() {
        if c == ',' {
            out.truncate(out.trim_end().len());
            out.push(',');
            after_comma = true;
        } else if after_comma && c.is_whitespace() {
            continue;
        } else {
            after_comma = false;
            out.push(c);
        }
    }

    out
}

/// True if `word` appears in `line` as a whole whitespace-delimited token.
///
/// `has_keyword("public class Car", "class")` is true, while
/// `has_keyword("public Classroom Room;", "class")` is not.
pub fn has_keyword(line: &str, word: &str) -> bool {
    line.split_whitespace().any(|token| token == word)
}

/// True for constructor or method lines, which never declare members.
pub fn is_constructor(line: &str) -> bool {
    line.contains('(') && line.contains(')')
}

/// True if the line contains an opening or closing brace.
pub fn has_brace(line: &str) -> bool {
    line.contains('{') || line.contains('}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comment() {
        assert_eq!(
            strip_comment("public int Year; // model year"),
            "public int Year; "
        );
        assert_eq!(strip_comment("// only a comment"), "");
        assert_eq!(strip_comment("public int Year;"), "public int Year;");
    }

    #[test]
    fn test_tokenize_drops_modifiers() {
        assert_eq!(
            tokenize("    public static readonly int Max;"),
            vec!["int", "Max;"]
        );
        assert_eq!(tokenize("public const string Name;"), vec!["string", "Name;"]);
    }

    #[test]
    fn test_tokenize_keeps_identifiers_containing_modifiers() {
        assert_eq!(
            tokenize("public PublicKey publicKey;"),
            vec!["PublicKey", "publicKey;"]
        );
        assert_eq!(tokenize("public int constant;"), vec!["int", "constant;"]);
    }

    #[test]
    fn test_tokenize_collapses_commas() {
        assert_eq!(
            tokenize("public Dictionary<string , int> Lookup;"),
            vec!["Dictionary<string,int>", "Lookup;"]
        );
        assert_eq!(tokenize("    Active ,"), vec!["Active,"]);
    }

    #[test]
    fn test_tokenize_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize("public").is_empty());
    }

    #[test]
    fn test_has_keyword_boundaries() {
        assert!(has_keyword("public class Car", "class"));
        assert!(has_keyword("enum Status", "enum"));
        assert!(has_keyword("class", "class"));
        assert!(!has_keyword("public Classroom Room;", "class"));
        assert!(!has_keyword("public int classCount;", "class"));
        assert!(!has_keyword("public Enumerable Items;", "enum"));
    }

    #[test]
    fn test_is_constructor() {
        assert!(is_constructor("public Car()"));
        assert!(is_constructor("public Car(int year) : base(year)"));
        assert!(!is_constructor("public int Year { get; set; }"));
    }
}
