use std::env;
use std::fs;

use monoulid::UlidGenerator;
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let state_file = env::temp_dir().join("monoulid-last.txt");

    // Whatever the previous run left behind; a missing or corrupt file is a no-op seed
    let previous = fs::read_to_string(&state_file).unwrap_or_default();
    let generator = UlidGenerator::builder().seed(previous.trim()).build();

    if !previous.is_empty() {
        println!("Resuming after {}", previous.trim());
    }

    for _ in 0..5 {
        println!("{}", generator.next());
    }

    fs::write(&state_file, generator.last().to_string())?;
    println!("Saved state to {}", state_file.display());
    Ok(())
}
