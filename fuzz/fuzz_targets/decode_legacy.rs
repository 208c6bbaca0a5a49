#![no_main]

use libfuzzer_sys::fuzz_target;
use marc_charconv::charset::{CharsetFamily, LegacyDecoder};

fuzz_target!(|data: &[u8]| {
    for family in [
        CharsetFamily::Marc8,
        CharsetFamily::Iso5426,
        CharsetFamily::Iso6937,
        CharsetFamily::Unimarc,
    ] {
        let _ = LegacyDecoder::new(family)
            .with_compose(true)
            .with_convert_unicode_sequences(true)
            .decode(data);
    }
});
