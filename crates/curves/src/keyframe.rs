/// A single `(time, value)` sample anchoring a curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    pub time: f64,
    pub value: f64,
}

impl Keyframe {
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<(f64, f64)> for Keyframe {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}

impl From<Keyframe> for (f64, f64) {
    fn from(key: Keyframe) -> Self {
        (key.time, key.value)
    }
}
