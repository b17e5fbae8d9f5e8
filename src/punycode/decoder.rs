// Punycode decoder (RFC 3492, Section 6.2).
//
// Everything before the last delimiter is the literal basic prefix. The
// remaining characters are read as generalized variable-length integers;
// each one advances the combined (code point, insertion index) state and
// inserts exactly one code point into the output.

use super::PunycodeError;
use super::digit::{
    BASE, DELIMITER, INITIAL_BIAS, INITIAL_N, adapt, decode_digit, is_basic, threshold,
};

/// Decode Punycode digits into a code point sequence.
///
/// Digits are case-insensitive. The input must not carry the `xn--` prefix.
///
/// ```
/// let chars = idnconv::punycode::decode("bcher-kva").unwrap();
/// assert_eq!(chars.iter().collect::<String>(), "bücher");
/// ```
pub fn decode(input: &str) -> Result<Vec<char>, PunycodeError> {
    // A delimiter in first position is not a separator: there is no
    // basic prefix and the delimiter is read as a (bad) digit.
    let (basic, digits, digits_at) = match input.rfind(DELIMITER) {
        Some(pos) if pos > 0 => (&input[..pos], &input[pos + 1..], pos + 1),
        _ => ("", input, 0),
    };

    let mut output: Vec<char> = Vec::with_capacity(input.len());
    for ch in basic.chars() {
        if !is_basic(ch) {
            return Err(PunycodeError::NonBasic { ch });
        }
        output.push(ch);
    }

    let mut n = INITIAL_N;
    let mut i = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut digits = digits
        .char_indices()
        .map(|(offset, ch)| (digits_at + offset, ch))
        .peekable();

    while digits.peek().is_some() {
        let old_i = i;
        let mut w = 1u32;
        let mut k = BASE;
        loop {
            let (position, ch) = digits.next().ok_or(PunycodeError::UnexpectedEnd)?;
            let digit = decode_digit(ch).ok_or(PunycodeError::InvalidDigit { ch, position })?;
            i = digit
                .checked_mul(w)
                .and_then(|step| i.checked_add(step))
                .ok_or(PunycodeError::Overflow)?;

            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            w = w.checked_mul(BASE - t).ok_or(PunycodeError::Overflow)?;
            k += BASE;
        }

        let out_len = u32::try_from(output.len() + 1).map_err(|_| PunycodeError::Overflow)?;
        bias = adapt(i - old_i, out_len, old_i == 0);
        n = n.checked_add(i / out_len).ok_or(PunycodeError::Overflow)?;
        i %= out_len;

        let c = char::from_u32(n).ok_or(PunycodeError::InvalidCodePoint(n))?;
        output.insert(i as usize, c);
        i += 1;
    }

    Ok(output)
}

/// Convenience wrapper around [`decode`] collecting into a `String`.
pub fn decode_to_string(input: &str) -> Result<String, PunycodeError> {
    decode(input).map(|chars| chars.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Result<String, PunycodeError> {
        decode_to_string(s)
    }

    #[test]
    fn known_labels() {
        assert_eq!(dec("bcher-kva").unwrap(), "bücher");
        assert_eq!(dec("maana-pta").unwrap(), "mañana");
        assert_eq!(dec("caf-dma").unwrap(), "café");
        assert_eq!(dec("tda").unwrap(), "ü");
    }

    #[test]
    fn digits_are_case_insensitive() {
        assert_eq!(dec("bcher-KVA").unwrap(), "bücher");
        assert_eq!(dec("BCHER-kva").unwrap(), "BüCHER");
    }

    #[test]
    fn empty_input() {
        assert_eq!(dec("").unwrap(), "");
    }

    #[test]
    fn invalid_digit_reports_position() {
        assert_eq!(
            dec("a!b"),
            Err(PunycodeError::InvalidDigit { ch: '!', position: 1 })
        );
        assert_eq!(
            dec("abc-d_f"),
            Err(PunycodeError::InvalidDigit { ch: '_', position: 5 })
        );
    }

    #[test]
    fn leading_delimiter_is_a_digit() {
        assert_eq!(
            dec("-abc"),
            Err(PunycodeError::InvalidDigit { ch: '-', position: 0 })
        );
    }

    #[test]
    fn non_basic_prefix_rejected() {
        assert_eq!(dec("bü-kva"), Err(PunycodeError::NonBasic { ch: 'ü' }));
    }

    #[test]
    fn truncated_integer() {
        // 'k' is above every threshold at the start, so another digit must follow.
        assert_eq!(dec("bcher-k"), Err(PunycodeError::UnexpectedEnd));
    }

    #[test]
    fn overflow_is_reported() {
        // Each '9' (35) keeps the integer going and multiplies the weight.
        assert_eq!(dec("999999999999"), Err(PunycodeError::Overflow));
    }

    #[test]
    fn surrogate_rejected() {
        // "ib9b" carries i = 0xD800 - 0x80 into an empty output.
        assert_eq!(dec("ib9b"), Err(PunycodeError::InvalidCodePoint(0xD800)));
    }

    #[test]
    fn trailing_delimiter_means_no_digits() {
        assert_eq!(dec("abc-").unwrap(), "abc");
    }
}
