//! Classifier evaluation harness
//!
//! Runs a quantized letter classifier, hosted by an external interpreter,
//! over a set of labeled test images and reports a verdict and confidence
//! for each one.
//!
//! The interpreter is a black box behind [`Interpreter`]: graph execution,
//! memory planning and kernel math all live on the other side of that trait.
//!
//! # Modules
//!
//! - [`interpreter`]: interpreter contract and quantization parameters
//! - [`model`]: fixed model settings and test sample type
//! - [`config`]: harness configuration
//! - [`evaluate`]: input encoding, argmax and confidence
//! - [`classifier`]: setup, per-sample classification and the sample loop

pub mod classifier;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod interpreter;
pub mod model;

pub use classifier::{Classifier, RunSummary, SampleResult};
pub use config::InferenceConfig;
pub use error::{InferenceError, Result};
pub use evaluate::{argmax, confidence, encode_image, Verdict};
pub use interpreter::{Interpreter, QuantParams};
pub use model::TestSample;
