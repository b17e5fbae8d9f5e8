use idnconv::idna::{has_ace_prefix, label_to_ascii};
use idnconv::punycode;
use idnconv::{domain_to_ascii, domain_to_unicode};
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9\\-äöüßéñçÄÖÜÉ日本語中文한국어ไทยпримерΑΒΓαβγ]{0,12}"
}

proptest! {
    #[test]
    fn prop_codec_roundtrip(chars in proptest::collection::vec(any::<char>(), 0..64)) {
        prop_assume!(chars.iter().any(|c| !c.is_ascii()));
        let encoded = punycode::encode(&chars).unwrap();
        let decoded = punycode::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, chars);
    }

    #[test]
    fn prop_pure_ascii_is_identity(input in "[ -~]{0,64}") {
        let encoded = punycode::encode_str(&input).unwrap();
        prop_assert_eq!(encoded, input);
    }

    #[test]
    fn prop_encoded_is_basic_prefix_then_digits(chars in proptest::collection::vec(any::<char>(), 1..48)) {
        prop_assume!(chars.iter().any(|c| !c.is_ascii()));
        let encoded = punycode::encode(&chars).unwrap();
        let basic: String = chars.iter().filter(|c| c.is_ascii()).collect();

        prop_assert!(encoded.starts_with(&basic));
        let digits = if basic.is_empty() {
            &encoded[..]
        } else {
            prop_assert_eq!(encoded.as_bytes()[basic.len()], b'-');
            &encoded[basic.len() + 1..]
        };
        prop_assert!(!digits.is_empty());
        prop_assert!(digits.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn prop_domain_roundtrip(labels in proptest::collection::vec(label_strategy(), 1..5)) {
        prop_assume!(labels.iter().all(|l| !has_ace_prefix(&l.to_lowercase())));
        let domain = labels.join(".");
        let ace = domain_to_ascii(&domain).unwrap();

        prop_assert!(ace.is_ascii());
        let expected: Vec<String> = labels.iter().map(|l| l.to_lowercase()).collect();
        prop_assert_eq!(domain_to_unicode(&ace).unwrap(), expected.join("."));
    }

    #[test]
    fn prop_labels_are_independent(a in label_strategy(), b in label_strategy()) {
        let joined = domain_to_ascii(&format!("{a}.{b}")).unwrap();
        let separate = format!("{}.{}", label_to_ascii(&a).unwrap(), label_to_ascii(&b).unwrap());
        prop_assert_eq!(joined, separate);
    }

    #[test]
    fn prop_non_ace_labels_pass_through(input in "[a-z0-9\\-.]{0,40}") {
        prop_assume!(input.split('.').all(|l| !has_ace_prefix(l)));
        prop_assert_eq!(domain_to_unicode(&input).unwrap(), input);
    }

    #[test]
    fn prop_decode_never_panics(input in any::<String>()) {
        let _ = punycode::decode(&input);
        let _ = domain_to_unicode(&format!("xn--{input}"));
    }

    #[test]
    fn prop_decode_ascii_digits_never_panics(input in "[a-zA-Z0-9\\-]{0,80}") {
        // Decoded values start at 0x80, so the only basic code points in a
        // successful result are the literal prefix.
        if let Ok(chars) = punycode::decode(&input) {
            let basic_len = match input.rfind('-') {
                Some(pos) if pos > 0 => pos,
                _ => 0,
            };
            prop_assert_eq!(chars.iter().filter(|c| c.is_ascii()).count(), basic_len);
        }
    }
}

#[test]
#[ignore = "performance properties are workload and machine dependent"]
fn perf_property_long_label_not_pathological() {
    use std::time::Instant;
    let label: String = (0..4096u32)
        .map(|i| char::from_u32(0x4E00 + (i * 7919) % 0x5000).unwrap())
        .collect();
    let t0 = Instant::now();
    let encoded = punycode::encode_str(&label).unwrap();
    let decoded = punycode::decode_to_string(&encoded).unwrap();
    let dt = t0.elapsed();
    assert_eq!(decoded, label);
    assert!(dt.as_secs_f64() < 20.0, "round trip took {:?}", dt);
}
