//! Inference harness configuration
//!
//! Defaults come from `build.rs`, which reads `WEI_SAMPLE_DELAY_MS` and
//! `WEI_TENSOR_ARENA_KB` from the build environment.

use super::model::SCHEMA_VERSION;

const FALLBACK_SAMPLE_DELAY_MS: u32 = 100;
const FALLBACK_TENSOR_ARENA_KB: usize = 50;

/// Harness configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InferenceConfig {
    /// Pause after each sample (ms)
    pub sample_delay_ms: u32,
    /// Size of the tensor arena handed to the interpreter (bytes)
    pub tensor_arena_size: usize,
    /// Model schema version accepted by `Classifier::setup`
    pub supported_schema_version: u32,
}

impl InferenceConfig {
    /// Build-time sample delay
    pub fn build_sample_delay_ms() -> u32 {
        env!("WEI_SAMPLE_DELAY_MS")
            .parse()
            .unwrap_or(FALLBACK_SAMPLE_DELAY_MS)
    }

    /// Build-time tensor arena size in bytes
    pub fn build_tensor_arena_size() -> usize {
        arena_bytes_from_kb(env!("WEI_TENSOR_ARENA_KB"))
    }
}

/// Parse a KiB count into bytes, falling back on parse errors or overflow
fn arena_bytes_from_kb(raw: &str) -> usize {
    raw.parse::<usize>()
        .ok()
        .and_then(|kb| kb.checked_mul(1024))
        .unwrap_or(FALLBACK_TENSOR_ARENA_KB * 1024)
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_delay_ms: Self::build_sample_delay_ms(),
            tensor_arena_size: Self::build_tensor_arena_size(),
            supported_schema_version: SCHEMA_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nonzero() {
        let config = InferenceConfig::default();
        assert_eq!(config.supported_schema_version, 3);
        assert!(config.tensor_arena_size >= 1024);
        assert_eq!(config.tensor_arena_size % 1024, 0);
    }

    #[test]
    fn test_arena_size_parsing() {
        assert_eq!(arena_bytes_from_kb("64"), 64 * 1024);
        assert_eq!(arena_bytes_from_kb("not a number"), 50 * 1024);

        let overflowing = format!("{}", usize::MAX / 1024 + 1);
        assert_eq!(arena_bytes_from_kb(&overflowing), 50 * 1024);
    }
}
