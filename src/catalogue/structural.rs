//! Structural digit predicates.
//!
//! Every predicate takes the MPIN as ASCII digit bytes. Callers guarantee the
//! slice is non-empty and digits only.

fn value(digit: u8) -> u8 {
    digit - b'0'
}

/// All digits identical, e.g. `1111`.
pub fn is_uniform(digits: &[u8]) -> bool {
    digits.iter().all(|&d| d == digits[0])
}

/// Each digit is the previous one plus or minus one, wrapping between 9 and 0
/// (`1234`, `7890`, `4321`, `2109`).
pub fn is_sequential(digits: &[u8]) -> bool {
    let ascending = digits
        .windows(2)
        .all(|w| value(w[1]) == (value(w[0]) + 1) % 10);
    let descending = digits
        .windows(2)
        .all(|w| value(w[1]) == (value(w[0]) + 9) % 10);
    ascending || descending
}

/// All digits odd, or all digits even.
pub fn is_uniform_parity(digits: &[u8]) -> bool {
    let odd = |d: &u8| value(*d) % 2 == 1;
    digits.iter().all(odd) || !digits.iter().any(odd)
}

/// `ABAB`, `ABABAB` or `ABCABC`.
pub fn is_periodic(digits: &[u8]) -> bool {
    match digits.len() {
        4 => digits[..2] == digits[2..],
        6 => {
            (digits[..2] == digits[2..4] && digits[2..4] == digits[4..])
                || digits[..3] == digits[3..]
        }
        _ => false,
    }
}

/// `ABBA` or `ABCCBA`.
pub fn is_palindrome(digits: &[u8]) -> bool {
    match digits.len() {
        4 | 6 => digits.iter().eq(digits.iter().rev()),
        _ => false,
    }
}

/// Consecutive equal pairs: `xxyy` or `xxyyzz`.
pub fn is_paired(digits: &[u8]) -> bool {
    match digits.len() {
        4 | 6 => digits.chunks(2).all(|pair| pair[0] == pair[1]),
        _ => false,
    }
}
