//! Lines traced on a standard numeric keypad.
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//!   0
//! ```

const KEYPAD_4_DIGIT: [&str; 14] = [
    // vertical
    "1470", "0741", "2580", "0852", "3690", "0963",
    // horizontal
    "1234", "4321", "7890", "0987",
    // diagonal
    "1590", "0951", "3570", "0753",
];

const KEYPAD_6_DIGIT: [&str; 12] = [
    // combined vertical
    "147258", "852741", "369258", "852963",
    // horizontal
    "123456", "654321", "789456", "654987",
    // L-shaped
    "159268", "862951", "357480", "084753",
];

/// Exact membership in the keypad catalogue for the MPIN's length.
pub fn is_keypad_line(digits: &[u8]) -> bool {
    let catalogue: &[&str] = match digits.len() {
        4 => &KEYPAD_4_DIGIT,
        6 => &KEYPAD_6_DIGIT,
        _ => return false,
    };
    catalogue.iter().any(|line| line.as_bytes() == digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalogued_line_matches() {
        for line in KEYPAD_4_DIGIT.iter().chain(KEYPAD_6_DIGIT.iter()) {
            assert!(is_keypad_line(line.as_bytes()), "{line}");
        }
    }

    #[test]
    fn test_vertical_keypad_lines() {
        assert!(is_keypad_line(b"2580"));
        assert!(is_keypad_line(b"0852"));
        assert!(is_keypad_line(b"147258"));
    }

    #[test]
    fn test_non_keypad_lines() {
        assert!(!is_keypad_line(b"2581"));
        assert!(!is_keypad_line(b"940281"));
    }

    #[test]
    fn test_other_lengths_are_not_catalogued() {
        assert!(!is_keypad_line(b"258"));
        assert!(!is_keypad_line(b"25800"));
    }
}
