//! Input parsing for editable fields.

/// Best-effort integer parse of a units text field.
///
/// Reads an optional sign and the leading run of digits, ignoring surrounding
/// whitespace and anything after the digits. Text with no leading integer
/// becomes 0; integers beyond `i64` clamp to `i64::MIN`/`i64::MAX`.
pub fn parse_units(raw: &str) -> i64 {
    let text = raw.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }

    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    // Only overflow can fail here, the text is all ASCII digits
    parsed.unwrap_or(if negative { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_units("3"), 3);
        assert_eq!(parse_units("10"), 10);
        assert_eq!(parse_units("0"), 0);
        assert_eq!(parse_units("007"), 7);
    }

    #[test]
    fn signs_and_whitespace() {
        assert_eq!(parse_units(" -2"), -2);
        assert_eq!(parse_units("+4"), 4);
        assert_eq!(parse_units("\t5 "), 5);
        assert_eq!(parse_units("- 5"), 0);
    }

    #[test]
    fn leading_integer_only() {
        assert_eq!(parse_units("12abc"), 12);
        assert_eq!(parse_units("3.9"), 3);
        assert_eq!(parse_units("4 units"), 4);
    }

    #[test]
    fn unparseable_becomes_zero() {
        assert_eq!(parse_units(""), 0);
        assert_eq!(parse_units("abc"), 0);
        assert_eq!(parse_units("-"), 0);
        assert_eq!(parse_units(".5"), 0);
    }

    #[test]
    fn oversized_integers_clamp() {
        assert_eq!(parse_units("99999999999999999999"), i64::MAX);
        assert_eq!(parse_units("-99999999999999999999"), i64::MIN);
        assert_eq!(parse_units("9223372036854775807"), i64::MAX);
        assert_eq!(parse_units("-9223372036854775808"), i64::MIN);
        assert_eq!(parse_units("12345678901234567890123abc"), i64::MAX);
    }
}
