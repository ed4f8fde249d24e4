#![no_main]

use libfuzzer_sys::fuzz_target;
use makegen::index::Extractor;
use makegen_core::languages::LanguageId;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let Ok(extractor) = Extractor::new("CWE") else {
        return;
    };
    for language in [LanguageId::C, LanguageId::Cpp] {
        let found = extractor.extract(&text, language);
        // Entry points are collapsed per unit.
        for (i, a) in found.iter().enumerate() {
            assert!(!found[i + 1..].contains(a));
        }
    }
});
