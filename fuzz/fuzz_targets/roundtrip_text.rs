#![no_main]

use libfuzzer_sys::fuzz_target;
use marc_charconv::charset::{CharsetFamily, LegacyDecoder, LegacyEncoder};

fuzz_target!(|text: &str| {
    for family in [
        CharsetFamily::Marc8,
        CharsetFamily::Iso5426,
        CharsetFamily::Iso6937,
        CharsetFamily::Unimarc,
    ] {
        let bytes = LegacyEncoder::new(family).encode(text);
        let _ = LegacyDecoder::new(family).decode(&bytes);
    }
});
