//! Keyframe curve evaluation.
//!
//! A [`Curve`] holds time-sorted [`Keyframe`]s and evaluates them under a [`CurveType`]
//! (linear, smoothstep, Catmull-Rom or cardinal spline). A [`CurveSet`] evaluates several
//! curves side by side, e.g. one per color channel, and both can be quantized into a
//! [`CurveLut`] for lookup table storage.

pub mod curve;
pub mod curve_set;
pub mod curve_type;
pub mod debug;
pub mod error;
pub mod interpolate;
pub mod keyframe;
pub mod lut;

pub use curve::Curve;
pub use curve_set::CurveSet;
pub use curve_type::{CurveType, DEFAULT_TENSION};
pub use debug::AwsmCurveLogging;
pub use error::{AwsmCurveError, Result};
pub use keyframe::Keyframe;
pub use lut::{CurveLut, CurveLutOptions, Quantize};
