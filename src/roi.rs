/// Bounds and grid of a range input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slider {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl Slider {
    /// Clamps `raw` into range and snaps it to the nearest step.
    pub fn snap(&self, raw: f64) -> u32 {
        if !raw.is_finite() {
            return self.default;
        }
        let clamped = raw.clamp(self.min as f64, self.max as f64);
        let steps = ((clamped - self.min as f64) / self.step as f64).round() as u32;
        (self.min + steps * self.step).min(self.max)
    }

    /// Parses an input's string value, falling back to the default.
    pub fn parse(&self, value: &str) -> u32 {
        value
            .trim()
            .parse::<f64>()
            .map(|raw| self.snap(raw))
            .unwrap_or(self.default)
    }
}

/// Average check in roubles.
pub const AVG_CHECK: Slider = Slider {
    min: 500,
    max: 5000,
    step: 100,
    default: 1500,
};

/// Guests per month.
pub const GUESTS: Slider = Slider {
    min: 500,
    max: 10000,
    step: 100,
    default: 2000,
};

/// Assumes the platform brings back `returning_share` of guests and lifts
/// their lifetime value by `ltv_uplift`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiModel {
    pub returning_share: f64,
    pub ltv_uplift: f64,
}

impl Default for RoiModel {
    fn default() -> Self {
        Self {
            returning_share: 0.2,
            ltv_uplift: 0.1,
        }
    }
}

impl RoiModel {
    /// Extra monthly revenue, rounded to whole roubles.
    pub fn additional_revenue(&self, avg_check: u32, guests: u32) -> u64 {
        let affected_guests = guests as f64 * self.returning_share;
        let ltv_increase = avg_check as f64 * self.ltv_uplift;
        (affected_guests * ltv_increase).round().max(0.0) as u64
    }
}

/// Groups thousands with a non-breaking space, the way `ru-RU` prints numbers.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_sixty_thousand() {
        let model = RoiModel::default();
        assert_eq!(model.additional_revenue(AVG_CHECK.default, GUESTS.default), 60_000);
    }

    #[test]
    fn revenue_at_slider_extremes() {
        let model = RoiModel::default();
        assert_eq!(model.additional_revenue(AVG_CHECK.min, GUESTS.min), 5_000);
        assert_eq!(model.additional_revenue(AVG_CHECK.max, GUESTS.max), 1_000_000);
    }

    #[test]
    fn revenue_rounds_to_whole_roubles() {
        let model = RoiModel {
            returning_share: 0.15,
            ltv_uplift: 0.1,
        };
        // 333 * 0.15 = 49.95, 1000 * 0.1 = 100
        assert_eq!(model.additional_revenue(1000, 333), 4_995);
        assert_eq!(model.additional_revenue(7, 5), 1);
    }

    #[test]
    fn snap_clamps_and_rounds_to_step() {
        assert_eq!(AVG_CHECK.snap(120.0), 500);
        assert_eq!(AVG_CHECK.snap(99_999.0), 5000);
        assert_eq!(AVG_CHECK.snap(1549.0), 1500);
        assert_eq!(AVG_CHECK.snap(1551.0), 1600);
        assert_eq!(GUESTS.snap(f64::NAN), GUESTS.default);
    }

    #[test]
    fn parse_falls_back_to_default() {
        assert_eq!(GUESTS.parse("2500"), 2500);
        assert_eq!(GUESTS.parse(" 700 "), 700);
        assert_eq!(GUESTS.parse("lots"), 2000);
        assert_eq!(GUESTS.parse(""), 2000);
    }

    #[test]
    fn groups_thousands_with_nbsp() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(950), "950");
        assert_eq!(format_grouped(1500), "1\u{a0}500");
        assert_eq!(format_grouped(60_000), "60\u{a0}000");
        assert_eq!(format_grouped(254_012), "254\u{a0}012");
        assert_eq!(format_grouped(1_000_000), "1\u{a0}000\u{a0}000");
    }
}
