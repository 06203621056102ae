use alloc::string::String;

use yam_lite_common::Value;

/// Turns plain scalar text into a typed [`Value`].
///
/// Checks run in a fixed order and the first pattern that matches decides:
/// octal `0[0-9]+`, hex `0x[0-9a-zA-Z]+`, decimal `[-+]?[0-9]+`,
/// real `[-+]?[0-9]+\.?[0-9]+([eE][-+]?[0-9]+)?`, then `null`, `false`,
/// `true`. Anything else, including a matched pattern whose conversion
/// fails, stays a string.
#[must_use]
pub fn coerce(text: String) -> Value {
    let bytes = text.as_bytes();

    match bytes {
        [b'0', rest @ ..] if !rest.is_empty() && rest.iter().all(u8::is_ascii_digit) => {
            return parse_radix(text, 1, 8);
        }
        [b'0', b'x', rest @ ..] if !rest.is_empty() && rest.iter().all(u8::is_ascii_alphanumeric) => {
            return parse_radix(text, 2, 16);
        }
        _ => {}
    }

    if is_integer(bytes) {
        return match text.parse::<i64>() {
            Ok(x) => Value::Integer(x),
            Err(_) => Value::String(text),
        };
    }

    if is_real(bytes) {
        return match text.parse::<f64>() {
            Ok(x) => Value::FloatingPoint(x),
            Err(_) => Value::String(text),
        };
    }

    match bytes {
        b"null" => Value::Null,
        b"false" => Value::Bool(false),
        b"true" => Value::Bool(true),
        _ => Value::String(text),
    }
}

fn parse_radix(text: String, prefix: usize, radix: u32) -> Value {
    match i64::from_str_radix(&text[prefix..], radix) {
        Ok(x) => Value::Integer(x),
        Err(_) => Value::String(text),
    }
}

fn skip_sign(bytes: &[u8]) -> &[u8] {
    match bytes {
        [b'-' | b'+', rest @ ..] => rest,
        _ => bytes,
    }
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|c| c.is_ascii_digit()).count()
}

fn is_integer(bytes: &[u8]) -> bool {
    let digits = skip_sign(bytes);
    !digits.is_empty() && digits.iter().all(u8::is_ascii_digit)
}

fn is_real(bytes: &[u8]) -> bool {
    let rest = skip_sign(bytes);
    let lead = digit_run(rest);
    let rest = &rest[lead..];
    let rest = match rest {
        // `1.5`: one or more digits on both sides of the dot
        [b'.', frac @ ..] => {
            let tail = digit_run(frac);
            if lead == 0 || tail == 0 {
                return false;
            }
            &frac[tail..]
        }
        // no dot: the two digit runs of the pattern need two digits in total
        _ if lead >= 2 => rest,
        _ => return false,
    };

    match rest {
        [] => true,
        [b'e' | b'E', exp @ ..] => {
            let exp = skip_sign(exp);
            !exp.is_empty() && exp.iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use alloc::string::ToString;

    use super::coerce;
    use yam_lite_common::Value;

    fn value(text: &str) -> Value {
        coerce(text.to_string())
    }

    #[test]
    fn numeric_precedence() {
        assert_eq!(value("010"), Value::Integer(8));
        assert_eq!(value("0x1F"), Value::Integer(31));
        assert_eq!(value("-5"), Value::Integer(-5));
        assert_eq!(value("+7"), Value::Integer(7));
        assert_eq!(value("0"), Value::Integer(0));
        assert_eq!(value("1.5e2"), Value::FloatingPoint(150.0));
        assert_eq!(value("-0.25"), Value::FloatingPoint(-0.25));
        assert_eq!(value("12e2"), Value::FloatingPoint(1200.0));
    }

    #[test]
    fn near_numbers_stay_strings() {
        assert_eq!(value("5."), Value::from("5."));
        assert_eq!(value(".5"), Value::from(".5"));
        assert_eq!(value("1e5"), Value::from("1e5"));
        assert_eq!(value("1.5e"), Value::from("1.5e"));
        assert_eq!(value("09"), Value::from("09"));
        assert_eq!(value("0xZZ"), Value::from("0xZZ"));
        assert_eq!(value("0x"), Value::from("0x"));
        assert_eq!(value("1.2.3"), Value::from("1.2.3"));
        assert_eq!(value("99999999999999999999"), Value::from("99999999999999999999"));
    }

    #[test]
    fn keywords() {
        assert_eq!(value("null"), Value::Null);
        assert_eq!(value("true"), Value::Bool(true));
        assert_eq!(value("false"), Value::Bool(false));
        assert_eq!(value("True"), Value::from("True"));
        assert_eq!(value("~"), Value::from("~"));
        assert_eq!(value(""), Value::from(""));
    }
}
