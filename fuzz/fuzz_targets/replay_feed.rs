#![no_main]

use cohab_core::feed::{FeedFormat, parse_feed};
use cohab_core::{CohabBuilder, Relation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let format = FeedFormat {
        skip_header: false,
        ..FeedFormat::default()
    };
    let Ok(events) = parse_feed(input, &format) else {
        return;
    };

    let mut builder = CohabBuilder::new();
    if builder.ingest_all(&events).is_err() {
        return;
    }
    let (graph, registry) = match builder.finish_with_registry() {
        Ok(done) => done,
        Err(_) => return,
    };

    let mut total = 0;
    for person in registry.real_persons() {
        for rel in &person.relations {
            assert_ne!(rel.other, person.id, "self relation");
            let other = registry.person(rel.other).expect("relation target registered");
            assert!(
                other.relations.contains(&Relation::new(person.id, rel.house.clone())),
                "asymmetric relation"
            );
            total += 1;
        }
    }
    assert_eq!(graph.edge_count() * 2, total);
});
