//! Model settings
//!
//! Fixed shape and labels of the bundled letter classifier.

/// Input image width in pixels
pub const IMAGE_WIDTH: usize = 28;
/// Input image height in pixels
pub const IMAGE_HEIGHT: usize = 28;
/// Input image channel count
pub const IMAGE_CHANNELS: usize = 1;
/// Bytes per input image
pub const IMAGE_SIZE: usize = IMAGE_WIDTH * IMAGE_HEIGHT * IMAGE_CHANNELS;

/// Number of output categories
pub const NUM_CATEGORIES: usize = 26;

/// Category labels, indexed by output position
pub const CATEGORY_LABELS: [&str; NUM_CATEGORIES] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

/// Schema version the harness accepts
pub const SCHEMA_VERSION: u32 = 3;

/// Label for an output position
pub fn label(index: usize) -> Option<&'static str> {
    CATEGORY_LABELS.get(index).copied()
}

/// One labeled test image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestSample<'a> {
    /// Expected category index
    pub label: u8,
    /// Grayscale pixels, row-major, `IMAGE_SIZE` bytes
    pub image: &'a [u8],
}

impl<'a> TestSample<'a> {
    pub const fn new(label: u8, image: &'a [u8]) -> Self {
        Self { label, image }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(IMAGE_SIZE, 784);
        assert_eq!(label(0), Some("A"));
        assert_eq!(label(25), Some("Z"));
        assert_eq!(label(26), None);
    }
}
