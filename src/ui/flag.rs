//! Flag icons keyed by ISO code.

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Flag emoji for a two-letter country code.
///
/// Built from the pair of regional-indicator symbols; terminals with emoji
/// support render it as a flag. Anything that is not exactly two ASCII
/// letters comes back unchanged.
pub fn flag_icon(code: &str) -> String {
    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None)
            if first.is_ascii_alphabetic() && second.is_ascii_alphabetic() =>
        {
            [first, second]
                .iter()
                .filter_map(|c| regional_indicator(*c))
                .collect()
        }
        _ => code.to_string(),
    }
}

fn regional_indicator(letter: char) -> Option<char> {
    let offset = u32::from(letter.to_ascii_uppercase()) - u32::from('A');
    char::from_u32(REGIONAL_INDICATOR_A + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_letter_codes_become_flags() {
        assert_eq!(flag_icon("FR"), "\u{1F1EB}\u{1F1F7}");
        assert_eq!(flag_icon("us"), "\u{1F1FA}\u{1F1F8}");
    }

    #[test]
    fn other_codes_pass_through() {
        assert_eq!(flag_icon("XKX"), "XKX");
        assert_eq!(flag_icon("1A"), "1A");
        assert_eq!(flag_icon(""), "");
    }
}
