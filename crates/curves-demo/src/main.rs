mod config;
mod logger;

use anyhow::Context;
use awsm_curves::{CurveLut, CurveSet, CurveType};
use config::CONFIG;

// sunset-ish gradient, one curve per channel
const RED: &[f64] = &[0.0, 0.05, 0.3, 0.9, 0.6, 1.0, 1.0, 0.2];
const GREEN: &[f64] = &[0.0, 0.0, 0.35, 0.25, 0.7, 0.6, 1.0, 0.1];
const BLUE: &[f64] = &[0.0, 0.3, 0.5, 0.1, 1.0, 0.45];

fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let curve_type = match std::env::var("CURVE_TYPE") {
        Ok(name) => name
            .parse::<CurveType>()
            .with_context(|| format!("unknown curve type {name:?}"))?,
        Err(_) => CONFIG.curve_type,
    };

    // the fourth curve is alpha, filled in below
    let mut gradient = CurveSet::from_flat_lists(&[RED, GREEN, BLUE, &[]])
        .context("gradient keys")?
        .with_curve_type(curve_type);

    // alpha always eases, regardless of the gradient type
    let alpha = &mut gradient[3];
    alpha.set_curve_type(CurveType::Smoothstep);
    alpha.add(0.0, 0.0);
    alpha.add(0.15, 1.0);
    alpha.add(0.85, 1.0);
    alpha.add(1.0, 0.0);

    tracing::info!(
        "gradient: {} channels, {} evaluation, {} samples",
        gradient.len(),
        curve_type,
        CONFIG.lut.precision
    );

    let lut = CurveLut::new(&gradient, &CONFIG.lut);

    if CONFIG.log_rows {
        for (index, row) in lut.rows().enumerate() {
            tracing::debug!("{index:>4}: {row:?}");
        }
    }

    tracing::info!(
        "midpoint {:?}, {} bytes ready for upload",
        gradient.value(0.5),
        lut.to_ne_bytes().len()
    );

    if CONFIG.print_json {
        print_json(&gradient)?;
    }

    Ok(())
}

#[cfg(feature = "serde")]
fn print_json(gradient: &CurveSet) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(gradient).context("serialize gradient")?;
    println!("{json}");
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_gradient: &CurveSet) -> anyhow::Result<()> {
    Ok(())
}
