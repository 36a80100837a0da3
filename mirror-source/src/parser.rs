//! Single-pass classifier turning the lines of one declaration into a [`Unit`].

use tsmirror_core::to_capitalized;
use tsmirror_ir::{EnumMember, Field, FieldType, Inheritance, Unit, UnitKind};

use crate::{
    Result, SourceContext, SourceUnit,
    scanner::{has_brace, has_keyword, is_constructor, strip_comment, tokenize},
    types::{clean_type, is_array_type, is_optional_type},
};

/// Modifiers skipped in front of a member's type.
const MEMBER_PREFIXES: &[&str] = &["virtual", "override"];

/// Parse every source unit, stopping at the first error.
pub fn parse_all(sources: &[SourceUnit]) -> Result<Vec<Unit>> {
    sources.iter().map(parse_unit).collect()
}

/// Parse one declaration file.
pub fn parse_unit(source: &SourceUnit) -> Result<Unit> {
    let unit = UnitParser::new(source).parse()?;
    tracing::debug!(
        unit = %unit.name,
        structure = %unit.structure,
        is_enum = unit.is_enum(),
        "parsed"
    );
    Ok(unit)
}

/// Parser state. Classification only moves forward:
/// `Start → Record → (end)` or `Start → Done(enum)`.
enum State {
    /// No header or member seen yet.
    Start,
    /// A class header or at least one member has been seen.
    Record {
        inherits: Option<Inheritance>,
        fields: Vec<Field>,
    },
    /// An enum header was found; the whole unit has been classified.
    Done(UnitKind),
}

impl State {
    fn into_record(self) -> (Option<Inheritance>, Vec<Field>) {
        match self {
            State::Record { inherits, fields } => (inherits, fields),
            State::Start | State::Done(_) => (None, Vec::new()),
        }
    }

    fn into_kind(self) -> UnitKind {
        match self {
            State::Done(kind) => kind,
            state => {
                let (inherits, fields) = state.into_record();
                UnitKind::Record { inherits, fields }
            }
        }
    }
}

struct UnitParser<'a> {
    source: &'a SourceUnit,
    name: String,
}

impl<'a> UnitParser<'a> {
    fn new(source: &'a SourceUnit) -> Self {
        Self {
            source,
            name: to_capitalized(&source.name),
        }
    }

    fn parse(self) -> Result<Unit> {
        let mut state = State::Start;

        for (index, raw) in self.source.lines.iter().enumerate() {
            state = self.step(state, index, raw)?;
            if matches!(state, State::Done(_)) {
                break;
            }
        }

        Ok(Unit::record(&self.name, &self.source.structure)
            .with_lines(self.source.lines.clone())
            .with_kind(state.into_kind()))
    }

    fn step(&self, state: State, index: usize, raw: &str) -> Result<State> {
        let line = strip_comment(raw);
        let is_enum = has_keyword(line, "enum");
        let is_class = has_keyword(line, "class");

        if (is_enum || is_class) && line.contains('{') {
            return Err(self.context().brace_on_header_error(&self.name, index, raw));
        }

        let tokens = tokenize(line);

        if is_enum {
            let underlying = if tokens.len() > 2 {
                tokens.last().cloned()
            } else {
                None
            };
            let members = self.parse_enum_members()?;
            return Ok(State::Done(UnitKind::Enum {
                underlying,
                members,
            }));
        }

        if is_class && line.contains(':') {
            let (_, mut fields) = state.into_record();
            let inherits = tokens.last().map(|token| Inheritance::new(base_type(token)));
            fields.push(Field::placeholder());
            return Ok(State::Record { inherits, fields });
        }

        if has_keyword(line, "public") && !is_class && !is_constructor(line) {
            if let Some(field) = parse_member(&tokens) {
                let (inherits, mut fields) = state.into_record();
                fields.push(field);
                return Ok(State::Record { inherits, fields });
            }
        }

        Ok(state)
    }

    /// Re-scan every line of the unit for enum members.
    ///
    /// Implicit members carry the last explicit value forward unchanged
    /// (`A = 5, B` gives `B` the value 5).
    fn parse_enum_members(&self) -> Result<Vec<EnumMember>> {
        let (members, _) = self
            .source
            .lines
            .iter()
            .enumerate()
            .map(|(index, raw)| (index, strip_comment(raw)))
            .filter(|(_, line)| is_enum_member_line(line))
            .try_fold(
                (Vec::new(), 0i32),
                |(mut members, carried), (index, line)| {
                    let member = self.parse_enum_member(index, line, carried)?;
                    let carried = member.value;
                    members.push(member);
                    Ok::<_, Box<crate::Error>>((members, carried))
                },
            )?;

        Ok(members)
    }

    fn parse_enum_member(&self, index: usize, line: &str, carried: i32) -> Result<EnumMember> {
        let tokens = tokenize(&line.replace('=', " = "));
        let name = tokens
            .first()
            .map(|token| token.replace(',', ""))
            .unwrap_or_default();

        if tokens.get(1).map(String::as_str) != Some("=") {
            return Ok(EnumMember::implicit(name, carried));
        }

        let literal = tokens
            .get(2)
            .map(|token| token.replace(',', ""))
            .unwrap_or_default();

        match parse_enum_value(&literal) {
            Some(value) => Ok(EnumMember::explicit(name, value)),
            None => Err(self
                .context()
                .invalid_enum_value_error(&self.name, index, literal)),
        }
    }

    fn context(&self) -> SourceContext {
        SourceContext::new(self.source.lines.join("\n"), self.source.display_path())
    }
}

/// Lines inside an enum that can declare a member.
fn is_enum_member_line(line: &str) -> bool {
    let trimmed = line.trim();

    !trimmed.is_empty()
        && !has_keyword(line, "enum")
        && !has_keyword(line, "namespace")
        && !has_keyword(line, "using")
        && !trimmed.starts_with('[')
        && !is_constructor(line)
        && !has_brace(line)
}

/// Parse an explicit enum value: `0x`-prefixed hexadecimal (as a 32-bit
/// pattern, so `0xFFFFFFFF` is -1) or signed decimal.
fn parse_enum_value(literal: &str) -> Option<i32> {
    match literal.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => {
            u32::from_str_radix(&literal[2..], 16).ok().map(|v| v as i32)
        }
        _ => literal.parse().ok(),
    }
}

/// Base class from the last header token (`Vehicle`, `:Vehicle`, `Vehicle,IAudited`).
fn base_type(token: &str) -> &str {
    let token = token.trim_start_matches(':');
    token.split(',').next().unwrap_or(token)
}

/// Build an unlinked field from a member line's tokens.
fn parse_member(tokens: &[String]) -> Option<Field> {
    let tokens = match tokens.first() {
        Some(first) if MEMBER_PREFIXES.contains(&first.as_str()) => &tokens[1..],
        _ => tokens,
    };

    let [ty, name, ..] = tokens else {
        return None;
    };

    let variable_name = name.split(['{', '=', ';']).next().unwrap_or_default();
    if variable_name.is_empty() {
        return None;
    }

    let mut field = Field::new(variable_name, FieldType::Unresolved(clean_type(ty)));
    field.is_array = is_array_type(ty);
    field.is_optional = is_optional_type(ty);
    Some(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn parse(name: &str, text: &str) -> Result<Unit> {
        parse_unit(&SourceUnit::from_text(name, "", text))
    }

    fn unresolved(field: &Field) -> &str {
        match &field.ty {
            FieldType::Unresolved(name) => name,
            other => panic!("expected unresolved type, got {other:?}"),
        }
    }

    #[test]
    fn test_enum_scenario() {
        let unit = parse("Status", "enum Status\n{\n    Active,\n    Inactive = 3,\n}\n").unwrap();

        assert!(unit.is_enum());
        assert_eq!(
            unit.enum_members(),
            &[
                EnumMember::implicit("Active", 0),
                EnumMember::explicit("Inactive", 3),
            ]
        );
    }

    #[test]
    fn test_enum_carries_last_explicit_value() {
        let unit = parse("Level", "enum Level\n{\n    A = 5,\n    B,\n    C,\n    D = 9\n}").unwrap();
        let values: Vec<_> = unit
            .enum_members()
            .iter()
            .map(|m| (m.name.as_str(), m.value, m.is_implicit))
            .collect();

        assert_eq!(
            values,
            vec![("A", 5, false), ("B", 5, true), ("C", 5, true), ("D", 9, false)]
        );
    }

    #[test]
    fn test_enum_hex_and_negative_values() {
        let unit = parse(
            "Flags",
            "public enum Flags : uint\n{\n    None = 0x0,\n    All = 0xFFFFFFFF,\n    Low = -2,\n    Mask=0X1f\n}",
        )
        .unwrap();
        let values: Vec<_> = unit.enum_members().iter().map(|m| m.value).collect();

        assert_eq!(values, vec![0, -1, -2, 31]);
        assert!(matches!(
            &unit.kind,
            UnitKind::Enum { underlying: Some(u), .. } if u == "uint"
        ));
    }

    #[test]
    fn test_enum_skips_noise_lines() {
        let text = "using System;\n\nnamespace Example.Models\n{\n    [Flags]\n    public enum Color // palette\n    {\n        Red, // warm\n\n        Blue\n    }\n}\n";
        let unit = parse("color", text).unwrap();
        let names: Vec<_> = unit.enum_members().iter().map(|m| m.name.as_str()).collect();

        assert_eq!(unit.name, "Color");
        assert_eq!(names, vec!["Red", "Blue"]);
    }

    #[test]
    fn test_enum_invalid_value() {
        let err = parse("Bad", "enum Bad\n{\n    A = 0xZZ,\n}").unwrap_err();

        match *err {
            Error::InvalidEnumValue { ref unit, ref token, .. } => {
                assert_eq!(unit, "Bad");
                assert_eq!(token, "0xZZ");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_enum_value_out_of_range() {
        assert!(parse("Big", "enum Big\n{\n    A = 4294967296\n}").is_err());
    }

    #[test]
    fn test_brace_on_header_line() {
        for text in ["public class Car {\n}", "enum Status {\n    A\n}"] {
            let err = parse("Car", text).unwrap_err();
            assert!(matches!(*err, Error::BraceOnHeader { .. }), "{text}");
        }
    }

    #[test]
    fn test_brace_on_header_keeps_raw_line() {
        let err = parse("Car", "public class Car : Vehicle { // note\n}").unwrap_err();

        match *err {
            Error::BraceOnHeader { ref line, .. } => {
                assert_eq!(line, "public class Car : Vehicle { // note")
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_record_scenario() {
        let text = "public class Car : Vehicle\n{\n    public int? Year;\n    public virtual ICollection<Part> Parts { get; set; }\n}\n";
        let unit = parse("Car", text).unwrap();

        assert!(!unit.is_enum());
        assert_eq!(unit.inherits(), Some(&Inheritance::new("Vehicle")));

        let fields = unit.fields();
        assert_eq!(fields.len(), 3);
        assert!(fields[0].is_placeholder());

        assert_eq!(fields[1].variable_name, "Year");
        assert_eq!(unresolved(&fields[1]), "int");
        assert!(fields[1].is_optional);
        assert!(!fields[1].is_array);

        assert_eq!(fields[2].variable_name, "Parts");
        assert_eq!(unresolved(&fields[2]), "Part");
        assert!(fields[2].is_array);
        assert!(!fields[2].is_optional);
    }

    #[test]
    fn test_record_without_inheritance() {
        let text = "namespace Shop\n{\n    public class Part\n    {\n        public string Name { get; set; }\n        public Part() { }\n        public decimal Price = 0;\n    }\n}";
        let unit = parse("Part", text).unwrap();
        let names: Vec<_> = unit
            .fields()
            .iter()
            .map(|f| f.variable_name.as_str())
            .collect();

        assert!(unit.inherits().is_none());
        assert_eq!(names, vec!["Name", "Price"]);
    }

    #[test]
    fn test_record_ignores_commented_members() {
        let text = "class Car\n{\n    // public int Hidden;\n    public int Shown; // public int Trailing;\n}";
        let unit = parse("Car", text).unwrap();

        assert_eq!(unit.fields().len(), 1);
        assert_eq!(unit.fields()[0].variable_name, "Shown");
    }

    #[test]
    fn test_inheritance_with_interfaces() {
        let unit = parse("Car", "class Car : Vehicle, IAudited\n{\n}").unwrap();
        assert_eq!(unit.inherits().map(|i| i.name.as_str()), Some("Vehicle"));
    }

    #[test]
    fn test_empty_unit_is_record() {
        let unit = parse("Empty", "").unwrap();

        assert!(!unit.is_enum());
        assert!(unit.fields().is_empty());
        assert!(unit.inherits().is_none());
    }

    #[test]
    fn test_parse_all_fails_fast() {
        let sources = vec![
            SourceUnit::from_text("Good", "", "class Good\n{\n}"),
            SourceUnit::from_text("Bad", "", "class Bad {\n}"),
            SourceUnit::from_text("Never", "", "enum Never {\n}"),
        ];

        let err = parse_all(&sources).unwrap_err();
        assert_eq!(err.unit(), Some("Bad"));
    }

    #[test]
    fn test_parse_enum_value() {
        assert_eq!(parse_enum_value("42"), Some(42));
        assert_eq!(parse_enum_value("-7"), Some(-7));
        assert_eq!(parse_enum_value("0x10"), Some(16));
        assert_eq!(parse_enum_value("0x"), None);
        assert_eq!(parse_enum_value(""), None);
        assert_eq!(parse_enum_value("1 << 2"), None);
    }
}
