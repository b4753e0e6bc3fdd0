//! Textual forms shared by every value type.
//!
//! Vector-like values print as `<x, y, z>`. Compound values print as
//! `Name[Key: value; Key: value]`. A precision given in the format string
//! (`{:.3}`) is forwarded to every number inside the value.

use std::fmt::{self, Display, Formatter};

use crate::error::ParseError;

/// Writes a single number, honouring the formatter's precision.
pub(crate) fn write_number(f: &mut Formatter<'_>, value: f64) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{value:.precision$}"),
        None => write!(f, "{value}"),
    }
}

/// Writes `<x, y, z>`.
pub(crate) fn write_triple(f: &mut Formatter<'_>, x: f64, y: f64, z: f64) -> fmt::Result {
    f.write_str("<")?;
    write_number(f, x)?;
    f.write_str(", ")?;
    write_number(f, y)?;
    f.write_str(", ")?;
    write_number(f, z)?;
    f.write_str(">")
}

/// Writes `Name[Key: value; Key: value]`.
pub(crate) fn write_named(
    f: &mut Formatter<'_>,
    name: &str,
    fields: &[(&str, &dyn Display)],
) -> fmt::Result {
    write!(f, "{name}[")?;
    for (i, (key, value)) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str("; ")?;
        }
        match f.precision() {
            Some(precision) => write!(f, "{key}: {value:.precision$}")?,
            None => write!(f, "{key}: {value}")?,
        }
    }
    f.write_str("]")
}

/// Parses a single number, ignoring surrounding whitespace.
pub(crate) fn parse_number(input: &str) -> Result<f64, ParseError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(trimmed.to_owned()))
}

/// Parses `<x, y, z>` into its three components.
pub(crate) fn parse_triple(input: &str) -> Result<[f64; 3], ParseError> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('<')
        .ok_or_else(|| ParseError::MissingToken {
            expected: "<",
            input: trimmed.to_owned(),
        })?
        .strip_suffix('>')
        .ok_or_else(|| ParseError::MissingToken {
            expected: ">",
            input: trimmed.to_owned(),
        })?;

    let mut components = [0.0; 3];
    let mut count = 0;
    for part in inner.split(',') {
        if count < 3 {
            components[count] = parse_number(part)?;
        }
        count += 1;
    }
    if count != 3 {
        return Err(ParseError::FieldCount {
            expected: 3,
            found: count,
        });
    }
    Ok(components)
}

/// Splits `Name[Key: value; ...]` into its field values, checking the type
/// name and each key in order.
pub(crate) fn parse_named<'a, const N: usize>(
    input: &'a str,
    name: &'static str,
    keys: [&'static str; N],
) -> Result<[&'a str; N], ParseError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_suffix(']')
        .ok_or_else(|| ParseError::MissingToken {
            expected: "]",
            input: trimmed.to_owned(),
        })?;
    let (found_name, fields) = body.split_once('[').ok_or_else(|| ParseError::MissingToken {
        expected: "[",
        input: trimmed.to_owned(),
    })?;
    if found_name.trim() != name {
        return Err(ParseError::UnexpectedTypeName {
            expected: name,
            found: found_name.trim().to_owned(),
        });
    }

    let mut values = [""; N];
    let mut count = 0;
    for field in fields.split(';') {
        if count < N {
            let (key, value) = field.split_once(':').ok_or_else(|| ParseError::MissingToken {
                expected: ":",
                input: field.trim().to_owned(),
            })?;
            if key.trim() != keys[count] {
                return Err(ParseError::UnexpectedField {
                    expected: keys[count],
                    found: key.trim().to_owned(),
                });
            }
            values[count] = value.trim();
        }
        count += 1;
    }
    if count != N {
        return Err(ParseError::FieldCount {
            expected: N,
            found: count,
        });
    }
    Ok(values)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn triple_parses_with_whitespace() {
        assert_eq!(parse_triple("  < 1, -2.5,3 > ").unwrap(), [1.0, -2.5, 3.0]);
    }

    #[test]
    fn triple_requires_brackets() {
        assert!(matches!(
            parse_triple("1, 2, 3"),
            Err(ParseError::MissingToken { expected: "<", .. })
        ));
    }

    #[test]
    fn triple_requires_three_components() {
        assert_eq!(
            parse_triple("<1, 2>"),
            Err(ParseError::FieldCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn triple_rejects_garbage_numbers() {
        assert_eq!(
            parse_triple("<1, x, 3>"),
            Err(ParseError::InvalidNumber("x".to_owned()))
        );
    }

    #[test]
    fn named_fields_are_split_in_order() {
        let [a, b] = parse_named("Ray[StartPoint: <1, 2, 3>; Direction: <0, 1, 0>]", "Ray", [
            "StartPoint",
            "Direction",
        ])
        .unwrap();
        assert_eq!(a, "<1, 2, 3>");
        assert_eq!(b, "<0, 1, 0>");
    }

    #[test]
    fn named_rejects_wrong_type_name() {
        let result = parse_named("Line[A: 1]", "Ray", ["A"]);
        assert!(matches!(
            result,
            Err(ParseError::UnexpectedTypeName { expected: "Ray", .. })
        ));
    }

    #[test]
    fn named_rejects_wrong_key() {
        let result = parse_named("Ray[A: 1; C: 2]", "Ray", ["A", "B"]);
        assert!(matches!(
            result,
            Err(ParseError::UnexpectedField { expected: "B", .. })
        ));
    }
}
