//! Logging flags.

/// Curve logging flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwsmCurveLogging {
    /// Wrap lookup table generation in a `tracing` span.
    pub quantize_timings: bool,
}

impl AwsmCurveLogging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quantize_timings(mut self, quantize_timings: bool) -> Self {
        self.quantize_timings = quantize_timings;
        self
    }
}
