use std::env;

fn main() {
    // Build-time defaults for the classifier harness.
    // Override by exporting the variables before building.

    // Delay between test samples in milliseconds
    if let Ok(delay) = env::var("WEI_SAMPLE_DELAY_MS") {
        println!("cargo:rustc-env=WEI_SAMPLE_DELAY_MS={}", delay);
        println!(
            "cargo:warning=Using WEI_SAMPLE_DELAY_MS from environment: {}",
            delay
        );
    } else {
        println!("cargo:rustc-env=WEI_SAMPLE_DELAY_MS=100");
    }

    // Tensor arena size in KiB handed to the interpreter
    if let Ok(arena) = env::var("WEI_TENSOR_ARENA_KB") {
        println!("cargo:rustc-env=WEI_TENSOR_ARENA_KB={}", arena);
        println!(
            "cargo:warning=Using WEI_TENSOR_ARENA_KB from environment: {}",
            arena
        );
    } else {
        println!("cargo:rustc-env=WEI_TENSOR_ARENA_KB=50");
    }

    println!("cargo:rerun-if-env-changed=WEI_SAMPLE_DELAY_MS");
    println!("cargo:rerun-if-env-changed=WEI_TENSOR_ARENA_KB");
}
