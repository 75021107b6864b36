//! One-shot conversion printed as JSON.
//!
//! Usage: cargo run --bin stride-convert -- --mode steps --steps 10000 [--activity running]
//!        [--height 5'10"] [--stride 30 --stride-unit inches] [--distance 3.1 --unit km]

use anyhow::{bail, Context};
use serde::Serialize;

use stride::config::{parse_height, Config};
use stride::engine::{distance_to_steps, steps_per_mile, steps_to_distance};
use stride::forms::{DistanceForm, StepsForm, StrideFields, StrideForm};
use stride::narrative::{describe_distance, describe_steps, describe_stride};
use stride::types::{Activity, DistanceUnit, StrideMethod, StrideUnit};

#[derive(Serialize)]
struct Report<I, R, N> {
    input: I,
    result: R,
    narrative: N,
}

fn arg(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load().context("Failed to load config")?;

    let activity: Activity = match arg(&args, "--activity") {
        Some(a) => a.parse()?,
        None => config.default_activity,
    };
    let height = match arg(&args, "--height") {
        Some(h) => parse_height(&h)?,
        None => config.default_height,
    };

    let mut stride = StrideFields::with_height(height);
    if let Some(value) = arg(&args, "--stride") {
        stride.method = StrideMethod::Custom;
        stride.custom_stride = value;
        if let Some(unit) = arg(&args, "--stride-unit") {
            stride.stride_unit = unit.parse::<StrideUnit>()?;
        }
    }

    let mode = arg(&args, "--mode").unwrap_or_else(|| "steps".to_string());
    let json = match mode.as_str() {
        "steps" => {
            let form = StepsForm {
                steps: arg(&args, "--steps").unwrap_or_default(),
                activity,
                stride,
            };
            let input = form.to_input(config.default_height);
            let result = steps_to_distance(&input)?;
            let narrative = describe_steps(&result);
            serde_json::to_string_pretty(&Report { input, result, narrative })?
        }
        "distance" => {
            let unit = match arg(&args, "--unit") {
                Some(u) => u.parse::<DistanceUnit>()?,
                None => DistanceUnit::default(),
            };
            let form = DistanceForm {
                distance: arg(&args, "--distance").unwrap_or_default(),
                unit,
                activity,
                stride,
            };
            let input = form.to_input(config.default_height);
            let result = distance_to_steps(&input)?;
            let narrative = describe_distance(&result);
            serde_json::to_string_pretty(&Report { input, result, narrative })?
        }
        "stride" => {
            let form = StrideForm { activity, stride };
            let input = form.to_input(config.default_height);
            let result = steps_per_mile(&input)?;
            let narrative = describe_stride(&result);
            serde_json::to_string_pretty(&Report { input, result, narrative })?
        }
        other => bail!("unknown mode {other:?}, expected steps, distance or stride"),
    };

    println!("{json}");
    Ok(())
}
