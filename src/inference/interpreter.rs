//! Interpreter contract
//!
//! The neural-network runtime that hosts the model. Implementations wrap an
//! existing interpreter; this crate never executes the graph itself.

/// Affine quantization parameters of a tensor
///
/// `real = (quantized - zero_point) * scale`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuantParams {
    pub scale: f32,
    pub zero_point: i32,
}

impl QuantParams {
    /// Map a quantized value back to a real number
    pub fn dequantize(&self, value: i8) -> f32 {
        (i64::from(value) - i64::from(self.zero_point)) as f32 * self.scale
    }
}

/// Interpreter hosting an int8 classifier
///
/// The model has a single int8 input tensor and a single int8 output tensor.
pub trait Interpreter {
    /// Interpreter-specific failure
    type Error;

    /// Schema version the loaded model was built with
    fn schema_version(&self) -> u32;

    /// Plan and allocate every tensor in the arena
    ///
    /// Must be called once before `input_mut`, `invoke` or `output`.
    fn allocate_tensors(&mut self) -> Result<(), Self::Error>;

    /// Bytes of the tensor arena in use after allocation, if known
    fn arena_used_bytes(&self) -> Option<usize> {
        None
    }

    /// Input tensor data
    fn input_mut(&mut self) -> &mut [i8];

    /// Run the model on the current input
    fn invoke(&mut self) -> Result<(), Self::Error>;

    /// Output tensor data from the last successful `invoke`
    fn output(&self) -> &[i8];

    /// Quantization parameters of the output tensor
    fn output_quantization(&self) -> QuantParams;
}
