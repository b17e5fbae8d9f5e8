// Punycode Bootstring parameters and digit tables (RFC 3492, Section 5).
//
// Digit values 0..=25 map to `a`..`z` and 26..=35 map to `0`..`9`.
// Decoding accepts either letter case; encoding always emits lowercase.

/// Number of digit values.
pub const BASE: u32 = 36;

/// Lower clamp of the digit threshold.
pub const T_MIN: u32 = 1;

/// Upper clamp of the digit threshold.
pub const T_MAX: u32 = 26;

/// Bias adaptation skew.
pub const SKEW: u32 = 38;

/// Damping applied to the first bias adaptation.
pub const DAMP: u32 = 700;

/// Bias before any code point has been coded.
pub const INITIAL_BIAS: u32 = 72;

/// First code point value past the basic range.
pub const INITIAL_N: u32 = 0x80;

/// Separates the literal basic prefix from the encoded digits.
pub const DELIMITER: char = '-';

// ---------------------------------------------------------------------------
// Digit tables
// ---------------------------------------------------------------------------

const ENCODE_TABLE: &[u8; BASE as usize] = b"abcdefghijklmnopqrstuvwxyz0123456789";

const INVALID: u8 = 0xFF;

/// ASCII byte -> digit value, `INVALID` for bytes outside the alphabet.
const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut value = 0;
    while value < ENCODE_TABLE.len() {
        let c = ENCODE_TABLE[value];
        table[c as usize] = value as u8;
        table[c.to_ascii_uppercase() as usize] = value as u8;
        value += 1;
    }
    table
}

/// Map a digit value (`0..BASE`) to its lowercase alphabet character.
#[inline]
pub fn encode_digit(value: u32) -> char {
    debug_assert!(value < BASE, "digit value {value} out of range");
    ENCODE_TABLE[value as usize] as char
}

/// Map an alphabet character (either case) to its digit value.
#[inline]
pub fn decode_digit(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        value => Some(u32::from(value)),
    }
}

/// Whether `c` is a basic code point (copied verbatim by the encoder).
#[inline]
pub fn is_basic(c: char) -> bool {
    (c as u32) < INITIAL_N
}

// ---------------------------------------------------------------------------
// Threshold and bias adaptation
// ---------------------------------------------------------------------------

/// Digit threshold `t(k) = clamp(k - bias, T_MIN, T_MAX)`.
#[inline]
pub fn threshold(k: u32, bias: u32) -> u32 {
    k.saturating_sub(bias).clamp(T_MIN, T_MAX)
}

/// Recompute the bias after coding a delta (RFC 3492, Section 6.1).
///
/// `num_points` is the number of code points coded so far, including the
/// one just coded. `first_time` selects the stronger `DAMP` scaling used
/// only for the first delta of a label.
pub fn adapt(delta: u32, num_points: u32, first_time: bool) -> u32 {
    let mut delta = if first_time { delta / DAMP } else { delta / 2 };
    delta += delta / num_points;

    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + ((BASE - T_MIN + 1) * delta) / (delta + SKEW)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_boundaries() {
        assert_eq!(encode_digit(0), 'a');
        assert_eq!(encode_digit(25), 'z');
        assert_eq!(encode_digit(26), '0');
        assert_eq!(encode_digit(35), '9');
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode_digit('a'), Some(0));
        assert_eq!(decode_digit('A'), Some(0));
        assert_eq!(decode_digit('Z'), Some(25));
        assert_eq!(decode_digit('0'), Some(26));
        assert_eq!(decode_digit('9'), Some(35));
    }

    #[test]
    fn decode_rejects_non_alphabet() {
        for c in ['-', '!', '.', ' ', '_', 'é', '\u{0}', '\u{7F}'] {
            assert_eq!(decode_digit(c), None, "{c:?}");
        }
    }

    #[test]
    fn every_digit_maps_back() {
        for value in 0..BASE {
            assert_eq!(decode_digit(encode_digit(value)), Some(value));
        }
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(threshold(36, 72), T_MIN);
        assert_eq!(threshold(73, 72), T_MIN);
        assert_eq!(threshold(80, 72), 8);
        assert_eq!(threshold(108, 72), T_MAX);
        assert_eq!(threshold(36, 0), T_MAX);
    }

    #[test]
    fn adapt_known_values() {
        // First adaptation after "bücher": delta 745 over 6 points.
        assert_eq!(adapt(745, 6, true), 0);
        assert_eq!(adapt(0, 1, false), 0);
        // Large deltas push the bias into the next multiple of BASE.
        assert!(adapt(1_000_000, 1, false) >= BASE);
    }

    #[test]
    fn basic_range() {
        assert!(is_basic('a'));
        assert!(is_basic('\u{7F}'));
        assert!(!is_basic('\u{80}'));
        assert!(!is_basic('ü'));
    }
}
