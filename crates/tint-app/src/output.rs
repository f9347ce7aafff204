//! Text and JSON rendering for command output.

use serde::Serialize;
use tint_color::{ColorRecord, ContrastPair, Oklch, RampKind};
use tint_store::Palette;

/// `oklch(L C h)` with CSS-style precision.
pub fn format_oklch(c: Oklch) -> String {
    format!("oklch({:.4} {:.4} {:.2})", c.l, c.c, c.h)
}

/// Ratio as `N.NN:1`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}

/// One ramp step with its contrast against both backgrounds.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: String,
    #[serde(flatten)]
    pub color: ColorRecord,
    pub contrast: ContrastPair,
}

#[derive(Debug, Serialize)]
pub struct RampReport {
    pub base: String,
    pub kind: RampKind,
    pub base_index: usize,
    pub light_bg: String,
    pub dark_bg: String,
    pub steps: Vec<StepReport>,
}

impl RampReport {
    pub fn to_table(&self) -> String {
        let mut out = format!(
            "  {:>5}  {:<7}  {:<32}  {:>5}  {:>12}  {:>12}\n",
            "step", "hex", "oklch", "alpha", self.light_bg, self.dark_bg
        );
        for (i, step) in self.steps.iter().enumerate() {
            let marker = if i == self.base_index { '*' } else { ' ' };
            out.push_str(&format!(
                "{marker} {:>5}  {:<7}  {:<32}  {:>5.2}  {:>7} {:<4}  {:>7} {:<4}\n",
                step.step,
                step.color.hex,
                format_oklch(step.color.oklch()),
                step.color.alpha,
                format_ratio(step.contrast.on_light),
                step.contrast.on_light_level,
                format_ratio(step.contrast.on_dark),
                step.contrast.on_dark_level,
            ));
        }
        out
    }
}

/// One line per palette; the selected one is starred.
pub fn palette_line(palette: &Palette, selected: bool) -> String {
    let marker = if selected { '*' } else { ' ' };
    let kind = match palette.kind {
        RampKind::Lightness => "lightness",
        RampKind::Alpha => "alpha",
    };
    let modes: Vec<&str> = palette.modes.iter().map(|m| m.name.as_str()).collect();
    format!(
        "{marker} {}  {:<16} {}  {:<9} {:>2} steps  [{}]",
        palette.id,
        palette.name,
        palette.base_color,
        kind,
        palette.color_count,
        modes.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_store::StoreDefaults;

    #[test]
    fn oklch_formatting() {
        assert_eq!(
            format_oklch(Oklch::new(0.62796, 0.25768, 29.2339)),
            "oklch(0.6280 0.2577 29.23)"
        );
    }

    #[test]
    fn ratio_formatting() {
        assert_eq!(format_ratio(21.0), "21.00:1");
        assert_eq!(format_ratio(4.5), "4.50:1");
    }

    #[test]
    fn palette_line_lists_modes() {
        let palette = Palette::lightness("indigo", "#6366f1", &StoreDefaults::default()).unwrap();
        let line = palette_line(&palette, true);
        assert!(line.starts_with("* "));
        assert!(line.contains("indigo"));
        assert!(line.contains("#6366f1"));
        assert!(line.contains("11 steps"));
        assert!(line.ends_with("[Light, Dark]"));
    }

    #[test]
    fn table_marks_base_step() {
        let color = ColorRecord::from_hex("#000000").unwrap();
        let contrast = tint_color::contrast_against("#000000", "#ffffff", "#1a1a1a").unwrap();
        let report = RampReport {
            base: "#000000".into(),
            kind: RampKind::Lightness,
            base_index: 1,
            light_bg: "#ffffff".into(),
            dark_bg: "#1a1a1a".into(),
            steps: vec![
                StepReport {
                    step: "100".into(),
                    color: color.clone(),
                    contrast,
                },
                StepReport {
                    step: "200".into(),
                    color,
                    contrast,
                },
            ],
        };
        let table = report.to_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("    100"));
        assert!(lines[2].starts_with("*   200"));
        assert!(lines[2].contains("21.00:1 AAA"));
    }

    #[test]
    fn step_report_json_is_flat() {
        let color = ColorRecord::from_hex("#ffffff").unwrap();
        let contrast = tint_color::contrast_against("#ffffff", "#ffffff", "#1a1a1a").unwrap();
        let json = serde_json::to_value(StepReport {
            step: "100".into(),
            color,
            contrast,
        })
        .unwrap();
        assert_eq!(json["step"], "100");
        assert_eq!(json["hex"], "#ffffff");
        assert!(json["L"].is_number());
        assert_eq!(json["contrast"]["on_light_level"], "fail");
    }
}
