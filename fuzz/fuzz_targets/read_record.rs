#![no_main]

use libfuzzer_sys::fuzz_target;
use marc_charconv::{MarcReader, RecoveryMode};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    for mode in [RecoveryMode::Strict, RecoveryMode::Lenient] {
        let mut reader = MarcReader::new(Cursor::new(data)).with_recovery_mode(mode);
        while let Ok(Some(_)) = reader.read_record() {}
    }
});
