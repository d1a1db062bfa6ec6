use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

/// Tension used by [`CurveType::Catmull`], and the default for [`CurveType::Cardinal`].
pub const DEFAULT_TENSION: f64 = 0.5;

/// Interpolation scheme applied between keys.
///
/// The numeric codes are stable and can be used when the scheme comes in as a raw integer
/// (see [`CurveType::from_repr`] and the lossy `From<u8>`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    FromRepr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum CurveType {
    Linear = 0,
    #[default]
    Smoothstep = 1,
    /// Catmull-Rom spline, fixed tension of [`DEFAULT_TENSION`].
    Catmull = 2,
    /// Cardinal spline using the curve's own tension.
    Cardinal = 3,
}

impl CurveType {
    pub fn is_spline(self) -> bool {
        matches!(self, CurveType::Catmull | CurveType::Cardinal)
    }
}

// unknown codes evaluate as linear
impl From<u8> for CurveType {
    fn from(value: u8) -> Self {
        CurveType::from_repr(value).unwrap_or(CurveType::Linear)
    }
}

impl From<CurveType> for u8 {
    fn from(value: CurveType) -> Self {
        value as u8
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_smoothstep() {
        assert_eq!(CurveType::default(), CurveType::Smoothstep);
    }

    #[test]
    fn test_codes_and_names() {
        let names: Vec<String> = CurveType::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["linear", "smoothstep", "catmull", "cardinal"]);

        for curve_type in CurveType::iter() {
            let code: u8 = curve_type.into();
            assert_eq!(CurveType::from(code), curve_type);
            assert_eq!(CurveType::from_str(curve_type.as_ref()).unwrap(), curve_type);
        }
    }

    #[test]
    fn test_unknown_code_is_linear() {
        assert_eq!(CurveType::from_repr(42), None);
        assert_eq!(CurveType::from(42u8), CurveType::Linear);
        assert!(CurveType::from_str("bezier").is_err());
    }
}
