//! Short-tag handling for the YAML 1.2 core schema.

pub const NULL: &str = "!!null";
pub const BOOL: &str = "!!bool";
pub const INT: &str = "!!int";
pub const FLOAT: &str = "!!float";
pub const STR: &str = "!!str";
pub const SEQ: &str = "!!seq";
pub const MAP: &str = "!!map";

const CORE_SCHEMA_PREFIX: &str = "tag:yaml.org,2002:";

/// Converts a core schema tag to its `!!` short form. Other tags are
/// returned unchanged.
///
/// # Example
///
/// ```
/// use yit::document::tag::shorten;
///
/// assert_eq!(shorten("tag:yaml.org,2002:int"), "!!int");
/// assert_eq!(shorten("!custom"), "!custom");
/// ```
pub fn shorten(tag: &str) -> String {
    match tag.strip_prefix(CORE_SCHEMA_PREFIX) {
        Some(suffix) => format!("!!{}", suffix),
        None => tag.to_string(),
    }
}

/// Resolves the implicit tag of an untagged plain scalar.
pub fn resolve_plain(value: &str) -> &'static str {
    if is_null(value) {
        NULL
    } else if is_bool(value) {
        BOOL
    } else if is_int(value) {
        INT
    } else if is_float(value) {
        FLOAT
    } else {
        STR
    }
}

fn is_null(value: &str) -> bool {
    matches!(value, "" | "~" | "null" | "Null" | "NULL")
}

fn is_bool(value: &str) -> bool {
    matches!(
        value,
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE"
    )
}

fn all_digits(s: &str, radix: u32) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_digit(radix))
}

fn is_int(value: &str) -> bool {
    if let Some(octal) = value.strip_prefix("0o") {
        return all_digits(octal, 8);
    }
    if let Some(hex) = value.strip_prefix("0x") {
        return all_digits(hex, 16);
    }
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    all_digits(unsigned, 10)
}

fn is_float(value: &str) -> bool {
    if matches!(value, ".nan" | ".NaN" | ".NAN") {
        return true;
    }
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    if matches!(unsigned, ".inf" | ".Inf" | ".INF") {
        return true;
    }

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((whole, fraction)) => {
            (whole.is_empty() || all_digits(whole, 10))
                && (fraction.is_empty() || all_digits(fraction, 10))
                && !(whole.is_empty() && fraction.is_empty())
        }
        None => all_digits(mantissa, 10),
    };

    let exponent_ok = match exponent {
        Some(exp) => all_digits(exp.strip_prefix(['-', '+']).unwrap_or(exp), 10),
        None => true,
    };

    mantissa_ok && exponent_ok
}
