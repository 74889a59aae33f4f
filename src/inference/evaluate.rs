//! Output evaluation
//!
//! Input encoding for the int8 model, plus argmax and confidence over the
//! output scores.

use core::fmt;

use super::error::{InferenceError, Result};
use super::interpreter::QuantParams;

/// Outcome of one classified sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Prediction matches the label
    Success,
    /// Prediction differs from the label
    Fail,
}

impl Verdict {
    /// `Success` when the prediction equals the label
    pub fn from_match(expected: usize, predicted: usize) -> Self {
        if expected == predicted {
            Verdict::Success
        } else {
            Verdict::Fail
        }
    }

    /// Report text, `SUCCESS` or `FAIL`
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Success => "SUCCESS",
            Verdict::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write unsigned pixels into a signed int8 input tensor
///
/// Each byte is shifted by -128, so 0 maps to -128 and 255 to 127.
///
/// # Errors
///
/// Returns `InferenceError::InputSizeMismatch` if the lengths differ.
pub fn encode_image(image: &[u8], input: &mut [i8]) -> Result<()> {
    if image.len() != input.len() {
        return Err(InferenceError::InputSizeMismatch {
            expected: input.len(),
            actual: image.len(),
        });
    }
    for (dst, &px) in input.iter_mut().zip(image) {
        *dst = px.wrapping_sub(128) as i8;
    }
    Ok(())
}

/// Index of the highest score
///
/// Ties resolve to the first index. Returns `None` for an empty slice.
pub fn argmax(scores: &[i8]) -> Option<usize> {
    let mut best: Option<(usize, i8)> = None;
    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

/// Confidence of a raw output score
///
/// The model ends in a softmax, so a score dequantized with the output
/// tensor's parameters is already a probability in `[0, 1)`.
pub fn confidence(raw: i8, params: QuantParams) -> f32 {
    params.dequantize(raw)
}

/// Confidence as a whole percentage, truncated toward zero
pub fn confidence_percent(raw: i8, params: QuantParams) -> i32 {
    (confidence(raw, params) * 100.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    // int8 softmax output quantization
    const SOFTMAX: QuantParams = QuantParams {
        scale: 1.0 / 256.0,
        zero_point: -128,
    };

    #[test]
    fn test_encode_image_shifts_range() {
        let image = [0u8, 127, 128, 210, 255];
        let mut input = [0i8; 5];
        encode_image(&image, &mut input).unwrap();
        assert_eq!(input, [-128, -1, 0, 82, 127]);
    }

    #[test]
    fn test_encode_image_size_mismatch() {
        let image = [0u8; 4];
        let mut input = [0i8; 5];
        assert_eq!(
            encode_image(&image, &mut input),
            Err(InferenceError::InputSizeMismatch {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn test_argmax_first_max_wins() {
        assert_eq!(argmax(&[]), None);
        assert_eq!(argmax(&[-128]), Some(0));
        assert_eq!(argmax(&[-5, 3, 7, 7, -128]), Some(2));
        assert_eq!(argmax(&[-128, -128, -128]), Some(0));
        assert_eq!(argmax(&[1, 2, 3, 127]), Some(3));
    }

    #[test]
    fn test_confidence_is_softmax_probability() {
        assert_eq!(confidence(-128, SOFTMAX), 0.0);
        assert_eq!(confidence_percent(-128, SOFTMAX), 0);
        assert_eq!(confidence(0, SOFTMAX), 0.5);
        assert_eq!(confidence_percent(0, SOFTMAX), 50);
        assert_eq!(confidence_percent(64, SOFTMAX), 75);
        assert_eq!(confidence_percent(127, SOFTMAX), 99);
    }

    #[test]
    fn test_confidence_uses_zero_point() {
        let params = QuantParams {
            scale: 1.0 / 256.0,
            zero_point: 0,
        };
        assert_eq!(confidence(-128, params), -0.5);
        assert_eq!(confidence_percent(0, params), 0);
    }

    #[test]
    fn test_verdict() {
        assert_eq!(Verdict::from_match(4, 4), Verdict::Success);
        assert_eq!(Verdict::from_match(4, 5), Verdict::Fail);
        assert_eq!(format!("{}", Verdict::Success), "SUCCESS");
        assert_eq!(Verdict::Fail.as_str(), "FAIL");
    }
}
