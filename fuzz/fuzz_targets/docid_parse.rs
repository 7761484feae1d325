#![no_main]

use cildocid::docid::DocId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(id) = DocId::parse(text) {
            assert_eq!(id.to_string(), text);
        }
    }
});
