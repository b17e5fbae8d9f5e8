#![no_main]
use libfuzzer_sys::fuzz_target;
use idnconv::{Charset, Converter, domain_to_unicode, punycode};

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic: only return errors.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = punycode::decode(text);
        let _ = domain_to_unicode(text);
        let _ = idnconv::url_to_unicode(text);
    }

    // Raw bytes through a non-UTF-8 charset.
    if let Ok(sjis) = Charset::for_label("shift_jis") {
        let _ = Converter::new(sjis).to_unicode(data);
    }
});
