use std::sync::Arc;
use std::thread;
use std::time::Duration;

use monoulid::UlidGenerator;
use rand::{rng, Rng};

fn main() {
    let generator = Arc::new(UlidGenerator::new());
    let mut handles = vec![];

    // Spawn multiple threads sharing one generator
    for thread_id in 0..4 {
        let gen = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut rng = rng();
            let mut ids = Vec::new();

            for i in 0..5 {
                let id = gen.next_ulid();
                println!(
                    "Thread {} generated ID {} ({}, ts={})",
                    thread_id,
                    i,
                    id,
                    id.timestamp_ms()
                );
                ids.push(id);

                // Random delay to simulate work
                thread::sleep(Duration::from_millis(rng.random_range(0..=9)));
            }
            ids
        }));
    }

    let mut all_ids = Vec::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    all_ids.sort_unstable();
    for i in 1..all_ids.len() {
        assert!(all_ids[i] > all_ids[i - 1], "IDs not unique!");
    }
    println!("\nAll {} IDs are unique and monotonically increasing!", all_ids.len());
}
