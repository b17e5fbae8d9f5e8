#![no_main]
use libfuzzer_sys::fuzz_target;
use idnconv::punycode;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let chars: Vec<char> = text.chars().collect();
    if chars.iter().all(|c| c.is_ascii()) {
        // Pure ASCII is returned as is and is not decodable as digits.
        assert_eq!(punycode::encode(&chars).unwrap(), text);
        return;
    }

    let encoded = match punycode::encode(&chars) {
        Ok(encoded) => encoded,
        // Only very long inputs can overflow the u32 accumulators.
        Err(_) => return,
    };
    let decoded = punycode::decode(&encoded).unwrap();
    assert_eq!(decoded, chars);
});
