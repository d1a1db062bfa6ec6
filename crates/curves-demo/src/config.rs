use std::sync::LazyLock;

use awsm_curves::{AwsmCurveLogging, CurveLutOptions, CurveType};

#[derive(Debug, Clone)]
pub struct Config {
    pub lut: CurveLutOptions,
    // overridden by the CURVE_TYPE env var
    pub curve_type: CurveType,
    pub log_rows: bool,
    pub print_json: bool,
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| Config {
    lut: CurveLutOptions::new(if cfg!(debug_assertions) { 16 } else { 256 }).with_logging(
        AwsmCurveLogging::new().with_quantize_timings(cfg!(debug_assertions)),
    ),
    curve_type: CurveType::Catmull,
    log_rows: cfg!(debug_assertions),
    print_json: cfg!(feature = "serde"),
});
