use std::ops::{Index, IndexMut};

use crate::{
    curve::Curve,
    curve_type::CurveType,
    error::{AwsmCurveError, Result},
    lut::sample_times,
};

/// A fixed-length collection of independent curves, e.g. one per color channel.
///
/// The set-wide [`CurveType`] is only a convenience for writing every curve at once.
/// [`CurveSet::curve_type`] returns the last value written through the set, even if a curve
/// was changed directly afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSet {
    curves: Vec<Curve>,
    curve_type: CurveType,
}

impl Default for CurveSet {
    // a single empty curve
    fn default() -> Self {
        Self::with_len(1)
    }
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// `len` empty curves.
    pub fn with_len(len: usize) -> Self {
        Self::from_curves(std::iter::repeat_with(Curve::new).take(len).collect())
    }

    /// One curve from interleaved `(time, value)` pairs.
    pub fn from_flat(data: &[f64]) -> Result<Self> {
        Ok(Self::from_curves(vec![Curve::from_flat(data)?]))
    }

    /// One curve per list of interleaved `(time, value)` pairs.
    pub fn from_flat_lists(lists: &[&[f64]]) -> Result<Self> {
        let curves = lists
            .iter()
            .map(|data| Curve::from_flat(data))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_curves(curves))
    }

    /// Wraps existing curves, their individual types are left as they are.
    pub fn from_curves(curves: Vec<Curve>) -> Self {
        Self {
            curves,
            curve_type: CurveType::default(),
        }
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Sets the interpolation scheme of every curve in the set.
    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        self.curve_type = curve_type;
        for curve in &mut self.curves {
            curve.set_curve_type(curve_type);
        }
    }

    pub fn with_curve_type(mut self, curve_type: CurveType) -> Self {
        self.set_curve_type(curve_type);
        self
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.curves.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Curve> {
        self.curves.iter_mut()
    }

    pub fn get(&self, index: usize) -> Result<&Curve> {
        let len = self.curves.len();
        self.curves
            .get(index)
            .ok_or(AwsmCurveError::CurveIndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Curve> {
        let len = self.curves.len();
        self.curves
            .get_mut(index)
            .ok_or(AwsmCurveError::CurveIndexOutOfRange { index, len })
    }

    /// Replaces the curve at `index`, returning the old one.
    pub fn set(&mut self, index: usize, curve: Curve) -> Result<Curve> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, curve))
    }

    /// Value of every curve at `time`, in curve order.
    pub fn value(&self, time: f64) -> Vec<f64> {
        let mut result = Vec::with_capacity(self.curves.len());
        self.value_into(time, &mut result);
        result
    }

    /// Same as [`CurveSet::value`], writing into a caller-owned buffer.
    ///
    /// `result` is resized to the number of curves, so it can be reused across calls.
    pub fn value_into(&self, time: f64, result: &mut Vec<f64>) {
        result.resize(self.curves.len(), 0.0);
        for (value, curve) in result.iter_mut().zip(&self.curves) {
            *value = curve.value(time);
        }
    }

    /// Samples all curves at `precision` evenly spaced times over `[0, 1]`.
    ///
    /// The table holds one row per sample: `table[sample * len + curve]`.
    pub fn quantize(&self, precision: usize) -> Vec<f32> {
        let mut values = Vec::new();
        self.quantize_into(precision, &mut values);
        values
    }

    /// Same as [`CurveSet::quantize`], reusing `values` as the output buffer.
    pub fn quantize_into(&self, precision: usize, values: &mut Vec<f32>) {
        values.clear();

        let times = sample_times(precision);
        values.reserve(times.len() * self.curves.len());

        for time in times {
            values.extend(self.curves.iter().map(|curve| curve.value(time) as f32));
        }
    }
}

impl Index<usize> for CurveSet {
    type Output = Curve;

    fn index(&self, index: usize) -> &Self::Output {
        &self.curves[index]
    }
}

impl IndexMut<usize> for CurveSet {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.curves[index]
    }
}

impl<'a> IntoIterator for &'a CurveSet {
    type Item = &'a Curve;
    type IntoIter = std::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl FromIterator<Curve> for CurveSet {
    fn from_iter<I: IntoIterator<Item = Curve>>(iter: I) -> Self {
        Self::from_curves(iter.into_iter().collect())
    }
}
