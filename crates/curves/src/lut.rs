//! Lookup tables built by sampling curves over `[0, 1]`.
//!
//! Tables are laid out one row per sample, each row holding one value per channel
//! (`data[sample * channels + channel]`). That is the layout consumers uploading the table
//! into texture storage rely on.

use crate::{curve::Curve, curve_set::CurveSet, debug::AwsmCurveLogging};

/// Smallest number of samples a table is built with.
pub const MIN_QUANTIZE_PRECISION: usize = 2;

/// Default number of samples for [`CurveLutOptions`].
pub const DEFAULT_LUT_PRECISION: usize = 256;

/// Evenly spaced sample times covering `[0, 1]`, `precision` raised to the minimum first.
pub(crate) fn sample_times(precision: usize) -> impl ExactSizeIterator<Item = f64> {
    let precision = precision.max(MIN_QUANTIZE_PRECISION);
    let step = 1.0 / (precision - 1) as f64;

    (0..precision).map(move |index| step * index as f64)
}

/// Anything that can be sampled into an interleaved lookup table.
pub trait Quantize {
    /// Values per sample.
    fn channel_count(&self) -> usize;

    /// Clears `values` and fills it with `precision` rows of [`Quantize::channel_count`] values.
    fn quantize_into(&self, precision: usize, values: &mut Vec<f32>);
}

impl Quantize for Curve {
    fn channel_count(&self) -> usize {
        1
    }

    fn quantize_into(&self, precision: usize, values: &mut Vec<f32>) {
        Curve::quantize_into(self, precision, values)
    }
}

impl Quantize for CurveSet {
    fn channel_count(&self) -> usize {
        self.len()
    }

    fn quantize_into(&self, precision: usize, values: &mut Vec<f32>) {
        CurveSet::quantize_into(self, precision, values)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CurveLutOptions {
    pub precision: usize,
    pub logging: AwsmCurveLogging,
}

impl CurveLutOptions {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            ..Default::default()
        }
    }

    pub fn with_logging(mut self, logging: AwsmCurveLogging) -> Self {
        self.logging = logging;
        self
    }
}

impl Default for CurveLutOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_LUT_PRECISION,
            logging: AwsmCurveLogging::default(),
        }
    }
}

/// A quantized curve or curve set, ready to be handed to lookup table storage.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveLut {
    pub precision: usize,
    pub channels: usize,
    pub data: Vec<f32>,
}

impl CurveLut {
    pub fn new(source: &impl Quantize, options: &CurveLutOptions) -> Self {
        let _maybe_span_guard = if options.logging.quantize_timings {
            Some(tracing::span!(tracing::Level::INFO, "Curve LUT quantize").entered())
        } else {
            None
        };

        let precision = options.precision.max(MIN_QUANTIZE_PRECISION);
        let channels = source.channel_count();

        let mut data = Vec::with_capacity(precision * channels);
        source.quantize_into(precision, &mut data);

        tracing::debug!("quantized curve LUT: {precision} samples x {channels} channels");

        Self {
            precision,
            channels,
            data,
        }
    }

    pub fn sample(&self, index: usize, channel: usize) -> Option<f32> {
        if channel >= self.channels {
            return None;
        }
        self.row(index).map(|row| row[channel])
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.precision || self.channels == 0 {
            return None;
        }
        let start = index * self.channels;
        self.data.get(start..start + self.channels)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        // chunks_exact panics on 0
        self.data.chunks_exact(self.channels.max(1))
    }

    /// Native-endian bytes of [`CurveLut::data`], in table order.
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * std::mem::size_of::<f32>());
        for value in &self.data {
            bytes.extend_from_slice(&value.to_ne_bytes());
        }
        bytes
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve_type::CurveType;

    fn ramp(from: f64, to: f64) -> Curve {
        Curve::from_flat(&[0.0, from, 1.0, to])
            .unwrap()
            .with_curve_type(CurveType::Linear)
    }

    #[test]
    fn test_sample_times() {
        let times: Vec<f64> = sample_times(5).collect();
        assert_eq!(times, [0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(sample_times(0).len(), 2);
        assert_eq!(sample_times(1).collect::<Vec<_>>(), [0.0, 1.0]);
    }

    #[test]
    fn test_options_defaults() {
        let options = CurveLutOptions::default();
        assert_eq!(options.precision, DEFAULT_LUT_PRECISION);
        assert!(!options.logging.quantize_timings);

        let options = CurveLutOptions::new(8)
            .with_logging(AwsmCurveLogging::new().with_quantize_timings(true));
        assert_eq!(options.precision, 8);
        assert!(options.logging.quantize_timings);
    }

    #[test]
    fn test_single_curve_lut() {
        let lut = CurveLut::new(&ramp(0.0, 1.0), &CurveLutOptions::new(3));
        assert_eq!(lut.precision, 3);
        assert_eq!(lut.channels, 1);
        assert_eq!(lut.data, [0.0, 0.5, 1.0]);
        assert_eq!(lut.sample(1, 0), Some(0.5));
        assert_eq!(lut.sample(1, 1), None);
        assert_eq!(lut.sample(3, 0), None);
    }

    #[test]
    fn test_curve_set_lut_rows() {
        let set = CurveSet::from_curves(vec![ramp(0.0, 1.0), ramp(1.0, 0.0), ramp(2.0, 2.0)]);
        let lut = CurveLut::new(&set, &CurveLutOptions::new(0).with_logging(
            AwsmCurveLogging::new().with_quantize_timings(true),
        ));

        assert_eq!(lut.precision, 2);
        assert_eq!(lut.channels, 3);
        assert_eq!(lut.row(0), Some(&[0.0, 1.0, 2.0][..]));
        assert_eq!(lut.row(1), Some(&[1.0, 0.0, 2.0][..]));
        assert_eq!(lut.row(2), None);
        assert_eq!(lut.rows().count(), 2);
        assert_eq!(lut.sample(1, 1), Some(0.0));
    }

    #[test]
    fn test_empty_set_lut() {
        let lut = CurveLut::new(&CurveSet::with_len(0), &CurveLutOptions::new(4));
        assert_eq!(lut.channels, 0);
        assert!(lut.data.is_empty());
        assert_eq!(lut.row(0), None);
        assert_eq!(lut.rows().count(), 0);
    }

    #[test]
    fn test_to_ne_bytes() {
        let lut = CurveLut::new(&ramp(0.0, 1.0), &CurveLutOptions::new(2));
        let bytes = lut.to_ne_bytes();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[0..4], &0.0f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &1.0f32.to_ne_bytes());
    }
}
