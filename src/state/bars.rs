//! Proficiency bar animation plan.
//!
//! The whole bar section fires once. When it does, each bar in DOM order gets
//! a fixed-stagger delay and the CSS width it should grow to.

#[cfg(test)]
#[path = "bars_test.rs"]
mod bars_test;

/// Target fill in percent from a `data-width` value.
///
/// Missing or malformed values are 0; the result is clamped to `[0, 100]`.
#[must_use]
pub fn parse_width(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match raw.trim().trim_end_matches('%').trim_end().parse::<f64>() {
        // `+ 0.0` folds -0 into 0.
        Ok(pct) if pct.is_finite() => pct.clamp(0.0, 100.0) + 0.0,
        _ => 0.0,
    }
}

/// Inline CSS width for a fill percentage.
#[must_use]
pub fn width_css(pct: f64) -> String {
    format!("{pct}%")
}

/// One bar's scheduled update.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStep {
    /// Position of the bar among the section's bars.
    pub index: usize,
    pub delay_ms: u32,
    /// Inline `width` to apply, e.g. `"95%"`.
    pub width: String,
}

/// One-shot trigger for a bar section.
#[derive(Debug, Clone)]
pub struct BarGroup {
    stagger_ms: u32,
    triggered: bool,
}

impl BarGroup {
    #[must_use]
    pub fn new(stagger_ms: u32) -> Self {
        Self { stagger_ms, triggered: false }
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// The section intersected. Returns the plan for `targets` (each bar's
    /// raw `data-width`) the first time, `None` ever after.
    pub fn trigger<S: AsRef<str>>(&mut self, targets: &[Option<S>]) -> Option<Vec<BarStep>> {
        if self.triggered {
            return None;
        }
        self.triggered = true;
        let steps = targets
            .iter()
            .enumerate()
            .map(|(index, raw)| BarStep {
                index,
                delay_ms: u32::try_from(index)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(self.stagger_ms),
                width: width_css(parse_width(raw.as_ref().map(|s| s.as_ref()))),
            })
            .collect();
        Some(steps)
    }
}
