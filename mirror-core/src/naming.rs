//! Identifier case conversion between C# and TypeScript conventions.

/// Convert an identifier to lower camelCase (e.g., "PartNumber" -> "partNumber").
///
/// Identifiers without any lowercase letter are treated as acronyms and
/// lowercased entirely ("ID" -> "id"). Identifiers that already start with a
/// lowercase character are returned unchanged.
pub fn to_lower_camel(s: &str) -> String {
    let mut chars = s.chars();
    let first = match chars.next() {
        None => return String::new(),
        Some(c) if c.is_lowercase() => return s.to_string(),
        Some(c) => c,
    };

    if !s.chars().any(|c| c.is_alphabetic() && c.is_lowercase()) {
        return s.to_lowercase();
    }

    first.to_lowercase().chain(chars).collect()
}

/// Convert an identifier to its capitalized form (e.g., "vehicle" -> "Vehicle").
pub fn to_capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) if c.is_uppercase() => s.to_string(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_lower_camel() {
        assert_eq!(to_lower_camel("Vehicle"), "vehicle");
        assert_eq!(to_lower_camel("PartNumber"), "partNumber");
        assert_eq!(to_lower_camel("year"), "year");
        assert_eq!(to_lower_camel(""), "");
    }

    #[test]
    fn test_to_lower_camel_acronyms() {
        assert_eq!(to_lower_camel("ID"), "id");
        assert_eq!(to_lower_camel("VIN_2"), "vin_2");
        // Mixed-case acronyms only lose their first capital
        assert_eq!(to_lower_camel("URLPath"), "uRLPath");
    }

    #[test]
    fn test_to_lower_camel_non_letter_start() {
        assert_eq!(to_lower_camel("_Hidden"), "_Hidden");
        assert_eq!(to_lower_camel("2Fast"), "2Fast");
    }

    #[test]
    fn test_to_capitalized() {
        assert_eq!(to_capitalized("vehicle"), "Vehicle");
        assert_eq!(to_capitalized("Vehicle"), "Vehicle");
        assert_eq!(to_capitalized("vehicleState"), "VehicleState");
        assert_eq!(to_capitalized(""), "");
    }

    #[test]
    fn test_round_trip_on_capitalized_names() {
        for name in ["Vehicle", "PartNumber", "VehicleStateHex"] {
            assert_eq!(to_capitalized(&to_lower_camel(name)), name);
        }
    }
}
