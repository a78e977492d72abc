use monoulid::{decode, generate, Ulid, UlidGenerator};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=monoulid=debug shows clock regressions and seeding
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Shared generator, one monotonic sequence for the whole process
    let first = generate();
    let second = generate();
    println!("Shared:     {first} < {second}");

    // Dedicated generator
    let generator = UlidGenerator::new();
    for _ in 0..3 {
        println!("Generated:  {}", generator.next());
    }

    // Decoding is lenient about case and I/L/O typos
    let decoded = decode(&first.to_lowercase()).expect("generated ULIDs always decode");
    println!(
        "Decoded:    timestamp={} ({:?}) random={:02X?}",
        decoded.timestamp_ms(),
        decoded.datetime(),
        decoded.random()
    );

    // Non-monotonic one-shot ULID
    println!("One-shot:   {}", Ulid::new());
}
