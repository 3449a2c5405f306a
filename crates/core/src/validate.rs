use thiserror::Error;

use crate::model::QuizId;

/// Reasons a raw `<id>` argument cannot be used as a lookup key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Falta el parámetro <id>.")]
    MissingParameter,

    #[error("El valor del parámetro <id> no es un número.")]
    NotANumber,
}

/// Turn a raw command argument into a quiz id.
///
/// The parse is lenient the way interactive users expect: surrounding
/// whitespace is ignored, an optional sign is accepted and anything after the
/// leading digits is dropped (`"12abc"` is 12, `"3.7"` is 3). No range check
/// is made; whether the id exists is the store's business.
///
/// The one departure from a plain leading-integer read: digits too large for
/// an `i64` are `NotANumber`, not an id that merely does not exist.
///
/// # Errors
///
/// Returns `InputError::MissingParameter` when `raw` is `None` and
/// `InputError::NotANumber` when no integer can be read from it.
pub fn validate_id(raw: Option<&str>) -> Result<QuizId, InputError> {
    let raw = raw.ok_or(InputError::MissingParameter)?;
    parse_leading_int(raw)
        .map(QuizId::new)
        .ok_or(InputError::NotANumber)
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_is_reported() {
        assert_eq!(validate_id(None), Err(InputError::MissingParameter));
    }

    #[test]
    fn non_numeric_argument_is_reported() {
        assert_eq!(validate_id(Some("abc")), Err(InputError::NotANumber));
        assert_eq!(validate_id(Some("")), Err(InputError::NotANumber));
        assert_eq!(validate_id(Some("-")), Err(InputError::NotANumber));
        assert_eq!(validate_id(Some(".5")), Err(InputError::NotANumber));
    }

    #[test]
    fn plain_integers_parse() {
        assert_eq!(validate_id(Some("42")), Ok(QuizId::new(42)));
        assert_eq!(validate_id(Some(" 7 ")), Ok(QuizId::new(7)));
        assert_eq!(validate_id(Some("+3")), Ok(QuizId::new(3)));
    }

    #[test]
    fn zero_and_negative_pass_through() {
        assert_eq!(validate_id(Some("0")), Ok(QuizId::new(0)));
        assert_eq!(validate_id(Some("-5")), Ok(QuizId::new(-5)));
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(validate_id(Some("12abc")), Ok(QuizId::new(12)));
        assert_eq!(validate_id(Some("3.7")), Ok(QuizId::new(3)));
    }

    #[test]
    fn overflow_is_not_a_number() {
        assert_eq!(
            validate_id(Some("99999999999999999999999")),
            Err(InputError::NotANumber)
        );
    }
}
