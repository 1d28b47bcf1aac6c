#![no_main]

use cohab_core::feed::{FeedFormat, parse_record};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(Some(event)) = parse_record(1, line, &FeedFormat::default()) {
        assert!(!event.house.is_empty());
        assert!(event.incoming.iter().all(|n| !n.is_empty()));
        assert!(event.outgoing.iter().all(|n| !n.is_empty()));
    }
});
