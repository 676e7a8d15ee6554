//! Keyboard shortcut normalization.
//!
//! Browsers disagree on how numpad keys surface: legacy `keyCode` ranges,
//! physical `code` identifiers, or the `key` label itself. The normalizer
//! tries an ordered list of pure strategies and falls back to the raw key
//! label, so unrecognized keys pass through unchanged.

/// Legacy `keyCode` for the top-row digits `0`..`9`.
const DIGIT_ROW: std::ops::RangeInclusive<u32> = 48..=57;
/// Legacy `keyCode` for the numeric-keypad digits `0`..`9`.
const NUMPAD_ROW: std::ops::RangeInclusive<u32> = 96..=105;

fn from_digit_row(key_code: u32) -> Option<String> {
    DIGIT_ROW
        .contains(&key_code)
        .then(|| digit(key_code - DIGIT_ROW.start()))
}

fn from_numpad_row(key_code: u32) -> Option<String> {
    NUMPAD_ROW
        .contains(&key_code)
        .then(|| digit(key_code - NUMPAD_ROW.start()))
}

/// Physical-key identifiers of the numeric keypad (`Numpad7`,
/// `NumpadDecimal`, ...).
fn from_physical_code(code: &str) -> Option<String> {
    let rest = code.strip_prefix("Numpad")?;
    match rest {
        d if d.len() == 1 && d.as_bytes()[0].is_ascii_digit() => Some(d.to_string()),
        "Decimal" => Some(".".to_string()),
        "Divide" => Some("/".to_string()),
        "Multiply" => Some("*".to_string()),
        "Enter" => Some("Enter".to_string()),
        _ => None,
    }
}

fn digit(offset: u32) -> String {
    char::from(b'0' + offset as u8).to_string()
}

/// Map a keydown's `(keyCode, code, key)` triple to its canonical shortcut
/// symbol. Pure and deterministic; never fails.
pub fn normalize(key_code: u32, code: &str, key: &str) -> String {
    from_digit_row(key_code)
        .or_else(|| from_numpad_row(key_code))
        .or_else(|| from_physical_code(code))
        .unwrap_or_else(|| key.to_string())
}
