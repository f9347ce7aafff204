//! Stateless color commands: generate, convert, contrast, name.

use tint_color::limits::{clamp_count, clamp_curve};
use tint_color::{
    color_name, contrast_against, contrast_ratio, hex_to_oklch, is_in_gamut, ContrastLevel, Ramp,
    RampKind, Rgb8,
};
use tint_common::Result;
use tracing::warn;

use crate::cli::GenerateArgs;
use crate::output::{format_oklch, format_ratio, RampReport, StepReport};
use crate::session::Session;

pub fn generate(args: &GenerateArgs, session: &Session) -> Result<()> {
    let report = build_report(args, session)?;
    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| tint_common::TintError::Other(format!("failed to serialize ramp: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", report.to_table());
    }
    Ok(())
}

pub(crate) fn build_report(args: &GenerateArgs, session: &Session) -> Result<RampReport> {
    let defaults = &session.defaults;
    let requested_count = args.count.unwrap_or(defaults.color_count);
    let count = clamp_count(requested_count);
    if count != requested_count {
        warn!(requested = requested_count, used = count, "step count clamped");
    }
    let requested_curve = args.curve.unwrap_or(defaults.lightness_curve);
    let curve = clamp_curve(requested_curve);
    if curve != requested_curve {
        warn!(requested = requested_curve, used = curve, "lightness curve clamped");
    }

    let ramp = if args.alpha {
        Ramp::alpha(&args.hex, count)?
    } else {
        Ramp::lightness(&args.hex, count, curve)?
    };

    let steps = ramp
        .colors
        .into_iter()
        .enumerate()
        .map(|(i, color)| -> Result<StepReport> {
            let contrast = contrast_against(&color.hex, &defaults.light_bg, &defaults.dark_bg)?;
            Ok(StepReport {
                step: ((i + 1) * 100).to_string(),
                color,
                contrast,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RampReport {
        base: tint_color::convert::normalize_hex(&args.hex)?,
        kind: if args.alpha {
            RampKind::Alpha
        } else {
            RampKind::Lightness
        },
        base_index: ramp.base_index,
        light_bg: defaults.light_bg.clone(),
        dark_bg: defaults.dark_bg.clone(),
        steps,
    })
}

pub fn convert(hex: &str) -> Result<()> {
    let rgb = Rgb8::from_hex(hex)?;
    let oklch = hex_to_oklch(hex)?;
    let gamut = if is_in_gamut(oklch.l, oklch.c, oklch.h) {
        "in sRGB"
    } else {
        "outside sRGB"
    };
    println!("hex    {}", rgb.to_hex());
    println!("rgb    rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
    println!("oklch  {}", format_oklch(oklch));
    println!("gamut  {gamut}");
    println!("name   {}", color_name(hex)?);
    Ok(())
}

pub fn contrast(first: &str, second: &str) -> Result<()> {
    let ratio = contrast_ratio(first, second)?;
    println!("{} {}", format_ratio(ratio), ContrastLevel::classify(ratio));
    Ok(())
}

pub fn name(hex: &str) -> Result<()> {
    println!("{}", color_name(hex)?);
    Ok(())
}
