//! Classifier runner
//!
//! Drives an [`Interpreter`] over labeled samples, one sample at a time.

use embedded_hal::delay::DelayNs;

use super::config::InferenceConfig;
use super::error::{InferenceError, Result};
use super::evaluate::{argmax, confidence_percent, encode_image, Verdict};
use super::interpreter::Interpreter;
use super::model::{label, TestSample, IMAGE_SIZE, NUM_CATEGORIES};

/// Classification of one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleResult {
    /// Expected category index
    pub expected: usize,
    /// Predicted category index
    pub predicted: usize,
    /// Confidence of the prediction, truncated percent
    pub confidence_percent: i32,
    /// Whether the prediction matched
    pub verdict: Verdict,
}

impl SampleResult {
    /// Label of the expected category
    pub fn expected_label(&self) -> &'static str {
        label(self.expected).unwrap_or("?")
    }

    /// Label of the predicted category
    pub fn predicted_label(&self) -> &'static str {
        label(self.predicted).unwrap_or("?")
    }
}

/// Totals for a sample run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunSummary {
    /// Samples classified correctly
    pub passed: usize,
    /// Samples classified incorrectly
    pub failed: usize,
    /// Samples that could not be classified
    pub errored: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored
    }
}

/// Letter classifier bound to an interpreter
pub struct Classifier<I: Interpreter> {
    interpreter: I,
    config: InferenceConfig,
}

impl<I: Interpreter> Classifier<I> {
    /// Check the model and allocate its tensors
    ///
    /// # Errors
    ///
    /// - `SchemaMismatch` if the model schema is not the supported one
    /// - `AllocationFailed` if the interpreter cannot allocate its tensors
    /// - `ArenaTooSmall` if the interpreter reports more arena use than
    ///   `config.tensor_arena_size`
    /// - `InputSizeMismatch` if the input tensor does not hold one image
    pub fn setup(mut interpreter: I, config: InferenceConfig) -> Result<Self> {
        let version = interpreter.schema_version();
        if version != config.supported_schema_version {
            let err = InferenceError::SchemaMismatch {
                found: version,
                expected: config.supported_schema_version,
            };
            crate::log_error!(
                "Model schema version {} not equal to supported version {}",
                version,
                config.supported_schema_version
            );
            return Err(err);
        }

        if interpreter.allocate_tensors().is_err() {
            crate::log_error!("AllocateTensors() failed");
            return Err(InferenceError::AllocationFailed);
        }

        if let Some(used) = interpreter.arena_used_bytes() {
            crate::log_debug!(
                "Tensor arena: {} of {} bytes used",
                used,
                config.tensor_arena_size
            );
            if used > config.tensor_arena_size {
                return Err(InferenceError::ArenaTooSmall {
                    used,
                    available: config.tensor_arena_size,
                });
            }
        }

        let input_len = interpreter.input_mut().len();
        if input_len != IMAGE_SIZE {
            crate::log_error!("Input tensor holds {} bytes, expected {}", input_len, IMAGE_SIZE);
            return Err(InferenceError::InputSizeMismatch {
                expected: IMAGE_SIZE,
                actual: input_len,
            });
        }

        Ok(Self {
            interpreter,
            config,
        })
    }

    /// Classify one sample
    ///
    /// # Errors
    ///
    /// - `LabelOutOfRange` if the sample label is not a category
    /// - `InputSizeMismatch` if the image is not `IMAGE_SIZE` bytes
    /// - `InvokeFailed` if the interpreter fails to run
    /// - `OutputTooShort` if the output has fewer than `NUM_CATEGORIES` scores
    pub fn classify(&mut self, sample: &TestSample<'_>) -> Result<SampleResult> {
        let expected = usize::from(sample.label);
        if expected >= NUM_CATEGORIES {
            return Err(InferenceError::LabelOutOfRange(sample.label));
        }

        encode_image(sample.image, self.interpreter.input_mut())?;

        if self.interpreter.invoke().is_err() {
            return Err(InferenceError::InvokeFailed);
        }

        let output = self.interpreter.output();
        let too_short = InferenceError::OutputTooShort {
            expected: NUM_CATEGORIES,
            actual: output.len(),
        };
        let scores = output.get(..NUM_CATEGORIES).ok_or(too_short)?;
        let predicted = argmax(scores).ok_or(too_short)?;

        Ok(SampleResult {
            expected,
            predicted,
            confidence_percent: confidence_percent(
                scores[predicted],
                self.interpreter.output_quantization(),
            ),
            verdict: Verdict::from_match(expected, predicted),
        })
    }

    /// Classify every sample in order and log the outcome of each
    ///
    /// Waits `sample_delay_ms` after each sample. A sample that cannot be
    /// classified is logged, counted in `errored`, and the run moves on.
    /// `on_result` sees every successful classification.
    pub fn run<D, F>(
        &mut self,
        samples: &[TestSample<'_>],
        delay: &mut D,
        mut on_result: F,
    ) -> RunSummary
    where
        D: DelayNs,
        F: FnMut(usize, &SampleResult),
    {
        let mut summary = RunSummary::default();

        for (index, sample) in samples.iter().enumerate() {
            crate::log_debug!("Test sample[{}] start", index);

            match self.classify(sample) {
                Ok(result) => {
                    crate::log_info!(
                        "Test sample \"{}\": Predicted {} ({}%) - {}",
                        result.expected_label(),
                        result.predicted_label(),
                        result.confidence_percent,
                        result.verdict
                    );
                    match result.verdict {
                        Verdict::Success => summary.passed += 1,
                        Verdict::Fail => summary.failed += 1,
                    }
                    on_result(index, &result);
                }
                Err(err) => {
                    crate::log_error!("Test sample[{}] failed: {}", index, err);
                    summary.errored += 1;
                }
            }

            delay.delay_ms(self.config.sample_delay_ms);
        }

        crate::log_info!(
            "Run complete: {} passed, {} failed, {} errored",
            summary.passed,
            summary.failed,
            summary.errored
        );
        summary
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Give up the classifier and return its interpreter
    pub fn into_interpreter(self) -> I {
        self.interpreter
    }
}
