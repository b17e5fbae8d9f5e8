// Punycode encoder (RFC 3492, Section 6.3).
//
// Basic code points are copied in order, followed by the delimiter (only
// when at least one basic code point was copied), followed by one
// generalized variable-length integer per extended code point. Extended
// values are visited in ascending order; each integer records how many
// positions were skipped since the previous insertion.

use super::PunycodeError;
use super::digit::{
    BASE, DELIMITER, INITIAL_BIAS, INITIAL_N, adapt, encode_digit, is_basic, threshold,
};

/// Encode a code point sequence into Punycode digits.
///
/// A sequence made only of basic code points is returned unchanged, with no
/// delimiter appended. The `xn--` prefix is not added.
///
/// ```
/// let chars: Vec<char> = "bücher".chars().collect();
/// assert_eq!(idnconv::punycode::encode(&chars).unwrap(), "bcher-kva");
/// ```
pub fn encode(input: &[char]) -> Result<String, PunycodeError> {
    let mut output = String::with_capacity(input.len() + 8);
    encode_into(input, &mut output)?;
    Ok(output)
}

/// Convenience wrapper around [`encode`] for string input.
pub fn encode_str(input: &str) -> Result<String, PunycodeError> {
    let chars: Vec<char> = input.chars().collect();
    encode(&chars)
}

/// Append the Punycode form of `input` to `output`.
///
/// Anything already in `output` is left in place, so callers can write a
/// prefix first. On error `output` may hold a partial encoding.
pub fn encode_into(input: &[char], output: &mut String) -> Result<(), PunycodeError> {
    let input_len = u32::try_from(input.len()).map_err(|_| PunycodeError::Overflow)?;

    let mut basic_len = 0u32;
    for &c in input.iter().filter(|&&c| is_basic(c)) {
        output.push(c);
        basic_len += 1;
    }

    if basic_len == input_len {
        return Ok(());
    }
    if basic_len > 0 {
        output.push(DELIMITER);
    }

    // Distinct extended values, ascending. Consumed one per outer round.
    let mut extended: Vec<u32> = input
        .iter()
        .map(|&c| c as u32)
        .filter(|&c| c >= INITIAL_N)
        .collect();
    extended.sort_unstable();
    extended.dedup();

    let mut n = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;

    for m in extended {
        // Skip every (value, position) pair between n and m for each of the
        // `handled + 1` insertion slots.
        let skipped = (m - n)
            .checked_mul(handled + 1)
            .ok_or(PunycodeError::Overflow)?;
        delta = delta.checked_add(skipped).ok_or(PunycodeError::Overflow)?;
        n = m;

        for &c in input {
            let c = c as u32;
            if c < n {
                delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
            } else if c == n {
                write_integer(delta, bias, output);
                bias = adapt(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
        n += 1;
    }

    debug_assert_eq!(handled, input_len);
    Ok(())
}

/// Emit `q` as a generalized variable-length integer, least significant
/// digit first.
fn write_integer(mut q: u32, bias: u32, output: &mut String) {
    let mut k = BASE;
    loop {
        let t = threshold(k, bias);
        if q < t {
            break;
        }
        output.push(encode_digit(t + (q - t) % (BASE - t)));
        q = (q - t) / (BASE - t);
        k += BASE;
    }
    output.push(encode_digit(q));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
