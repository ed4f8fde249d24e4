#![no_main]

use libfuzzer_sys::fuzz_target;
use makegen::patch::{MarkerRegion, patch_region};
use makegen_core::markers::RegionId;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let region = MarkerRegion::from_id(RegionId::FunctionCalls);
    let body = vec!["CWE1_a_bad();".to_string(), "CWE1_a_good();".to_string()];

    // A successful patch is a fixed point.
    if let Ok(once) = patch_region(&text, &region, &body) {
        let twice = patch_region(&once, &region, &body).unwrap();
        assert_eq!(once, twice);
    }
});
