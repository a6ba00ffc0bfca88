//! BDD Test Runner for chilean-rut
//!
//! Runs the Cucumber/Gherkin scenarios in the workspace `features/` directory.
//!
//! # Usage
//!
//! ```bash
//! cargo test --test bdd -- --nocapture
//! ```

// Allow panic/expect in test code - these are appropriate for test setup
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod steps;

use cucumber::World;
use std::path::Path;

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();

    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let features_dir = Path::new(manifest_dir)
        .parent() // packages/
        .and_then(|p| p.parent()) // project root
        .map(|p| p.join("features"))
        .expect("Could not find features directory");

    if !features_dir.exists() {
        panic!("Features directory not found: {}", features_dir.display());
    }

    // run_and_exit: a failed scenario must fail `cargo test`, which plain
    // run() does not do for a harness = false target
    world::RutWorld::cucumber()
        .max_concurrent_scenarios(1)
        .with_default_cli()
        .run_and_exit(features_dir)
        .await;
}
