use std::{cmp::Ordering, ops::Index};

use crate::{
    curve_type::{CurveType, DEFAULT_TENSION},
    error::{AwsmCurveError, Result},
    interpolate::{interpolate_cardinal, interpolate_catmull_rom, interpolate_linear, smoothstep},
    keyframe::Keyframe,
    lut::sample_times,
};

/// A collection of keys (time/value pairs) evaluated under an interpolation scheme.
///
/// Keys are always kept in ascending time order. Keys sharing a time are allowed and keep the
/// order they were inserted in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Curve {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_sorted_keys"))]
    keys: Vec<Keyframe>,
    curve_type: CurveType,
    // only used by CurveType::Cardinal
    tension: f64,
}

impl Default for Curve {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            curve_type: CurveType::default(),
            tension: DEFAULT_TENSION,
        }
    }
}

impl Curve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a curve from interleaved `(time, value)` pairs.
    ///
    /// An odd trailing element is ignored, non-finite entries are an error.
    pub fn from_flat(data: &[f64]) -> Result<Self> {
        let used = data.len() - data.len() % 2;
        if used != data.len() {
            tracing::warn!(
                "ignoring trailing element of odd-length curve data ({} entries)",
                data.len()
            );
        }

        let data = &data[..used];

        let non_finite = data
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| !value.is_finite());

        if let Some((index, value)) = non_finite {
            return Err(AwsmCurveError::NonFiniteKey { index, value });
        }

        let keys = data
            .chunks_exact(2)
            .map(|pair| Keyframe::new(pair[0], pair[1]))
            .collect();

        Ok(Self::from_keys(keys))
    }

    pub fn from_keys(mut keys: Vec<Keyframe>) -> Self {
        sort_keys(&mut keys);
        Self {
            keys,
            ..Self::default()
        }
    }

    pub fn with_curve_type(mut self, curve_type: CurveType) -> Self {
        self.curve_type = curve_type;
        self
    }

    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        self.curve_type = curve_type;
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }

    pub fn set_tension(&mut self, tension: f64) {
        self.tension = tension;
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Inserts a key after every existing key with a time less than or equal to `time`.
    pub fn add(&mut self, time: f64, value: f64) -> Keyframe {
        let key = Keyframe::new(time, value);
        let index = self
            .keys
            .iter()
            .position(|existing| existing.time > time)
            .unwrap_or(self.keys.len());

        self.keys.insert(index, key);
        key
    }

    pub fn get(&self, index: usize) -> Result<Keyframe> {
        self.keys
            .get(index)
            .copied()
            .ok_or(AwsmCurveError::KeyIndexOutOfRange {
                index,
                len: self.keys.len(),
            })
    }

    /// Stable sort by time, keys sharing a time keep their relative order.
    pub fn sort(&mut self) {
        sort_keys(&mut self.keys);
    }

    /// Returns the interpolated value of the curve at `time`.
    ///
    /// An empty curve is 0 everywhere. Outside of the key range the first/last value is held.
    pub fn value(&self, time: f64) -> f64 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };

        if time < first.time {
            return first.value;
        } else if time > last.time {
            return last.value;
        } else if time.is_nan() {
            return f64::NAN;
        }

        match self.search_bounds(time) {
            KeyBounds::ExactHit(index) => self.keys[index].value,
            KeyBounds::Between(left_index, right_index) => {
                self.interpolate(left_index, right_index, time)
            }
        }
    }

    /// Nearest key to `time`, the later key wins a tie.
    ///
    /// The scan stops as soon as the distance grows, which is sound because keys are sorted.
    pub fn closest(&self, time: f64) -> Option<Keyframe> {
        let mut min = f64::INFINITY;
        let mut result = None;

        for key in &self.keys {
            let diff = (time - key.time).abs();
            if min >= diff {
                min = diff;
                result = Some(*key);
            } else {
                break;
            }
        }

        result
    }

    /// Samples the curve at `precision` evenly spaced times over `[0, 1]`.
    ///
    /// `precision` is raised to at least 2.
    pub fn quantize(&self, precision: usize) -> Vec<f32> {
        let mut values = Vec::new();
        self.quantize_into(precision, &mut values);
        values
    }

    /// Same as [`Curve::quantize`], reusing `values` as the output buffer.
    pub fn quantize_into(&self, precision: usize, values: &mut Vec<f32>) {
        values.clear();
        values.extend(sample_times(precision).map(|time| self.value(time) as f32));
    }

    // Expects `time` to lie within the key range and not be NaN.
    // Returns the first key at exactly `time`, or the keys strictly either side of it.
    fn search_bounds(&self, time: f64) -> KeyBounds {
        let index = self.keys.partition_point(|key| key.time < time);

        match self.keys.get(index) {
            Some(key) if key.time == time => KeyBounds::ExactHit(index),
            // only reachable with NaN keys, clamp rather than index out of bounds
            _ if index == 0 => KeyBounds::ExactHit(0),
            None => KeyBounds::ExactHit(self.keys.len() - 1),
            Some(_) => KeyBounds::Between(index - 1, index),
        }
    }

    fn interpolate(&self, left_index: usize, right_index: usize, time: f64) -> f64 {
        let left = self.keys[left_index];
        let right = self.keys[right_index];

        let duration = right.time - left.time;
        let interpolation_time = if duration == 0.0 {
            0.0
        } else {
            (time - left.time) / duration
        };

        match self.curve_type {
            CurveType::Linear => interpolate_linear(left.value, right.value, interpolation_time),
            CurveType::Smoothstep => {
                interpolate_linear(left.value, right.value, smoothstep(interpolation_time))
            }
            CurveType::Catmull => {
                let [p0, p1, p2, p3] = self.control_points(left_index, right_index);
                interpolate_catmull_rom(p0, p1, p2, p3, interpolation_time)
            }
            CurveType::Cardinal => {
                let [p0, p1, p2, p3] = self.control_points(left_index, right_index);
                interpolate_cardinal(p0, p1, p2, p3, interpolation_time, self.tension)
            }
        }
    }

    // Four spline control values around the bracket.
    //
    // p0/p3 come from the neighbouring keys, rescaled so the tangents behave as if every
    // segment had the duration of the bracket. At the ends (or next to a zero-length
    // segment) they are reflected from the bracket instead.
    fn control_points(&self, left_index: usize, right_index: usize) -> [f64; 4] {
        let left = self.keys[left_index];
        let right = self.keys[right_index];

        let p1 = left.value;
        let p2 = right.value;
        let dt1 = right.time - left.time;

        let mut p0 = p1 + (p1 - p2);
        let mut p3 = p2 + (p2 - p1);

        if let Some(prev) = left_index.checked_sub(1).map(|index| self.keys[index]) {
            let dt0 = left.time - prev.time;
            if dt0 > 0.0 {
                p0 = p1 + (prev.value - p1) * dt1 / dt0;
            }
        }

        if let Some(next) = self.keys.get(right_index + 1) {
            let dt2 = next.time - right.time;
            if dt2 > 0.0 {
                p3 = p2 + (next.value - p2) * dt1 / dt2;
            }
        }

        [p0, p1, p2, p3]
    }
}

impl Index<usize> for Curve {
    type Output = Keyframe;

    fn index(&self, index: usize) -> &Self::Output {
        &self.keys[index]
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Keyframe;
    type IntoIter = std::slice::Iter<'a, Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl FromIterator<Keyframe> for Curve {
    fn from_iter<I: IntoIterator<Item = Keyframe>>(iter: I) -> Self {
        Self::from_keys(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyBounds {
    ExactHit(usize),
    Between(usize, usize),
}

fn sort_keys(keys: &mut [Keyframe]) {
    keys.sort_by(|a, b| compare_time(a.time, b.time));
}

// total order for the sort: NaN after everything, -0.0 equal to 0.0
fn compare_time(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(feature = "serde")]
fn deserialize_sorted_keys<'de, D>(deserializer: D) -> std::result::Result<Vec<Keyframe>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let mut keys: Vec<Keyframe> = serde::Deserialize::deserialize(deserializer)?;
    sort_keys(&mut keys);
    Ok(keys)
}
