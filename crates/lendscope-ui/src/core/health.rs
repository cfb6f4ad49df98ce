//! Account health score to gauge colour mapping.
//!
//! # Design
//! - Three bands split at 20 and 50, evaluated on the raw score.
//! - The red channel steps from 255 down to 225 as the score leaves the
//!   critical band; that step is part of the palette.
//! - Scores outside `[0, 100]` are mapped unclamped and can yield channels
//!   outside the byte range. Clamp at the presentation boundary with
//!   [`Rgb::clamped`].

use std::fmt;

const CRITICAL_CEILING: f64 = 20.0;
const HEALTHY_FLOOR: f64 = 50.0;
const CHANNEL_SLOPE: f64 = 5.1;
const WARNING_RED: i32 = 225;
const HEALTHY_GREEN: i32 = 166;

/// RGB colour with signed channels so out-of-range results stay visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: i32,
    /// Green channel.
    pub green: i32,
    /// Blue channel.
    pub blue: i32,
}

impl Rgb {
    /// Build a colour from its channels.
    #[must_use]
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Copy with every channel clamped into `[0, 255]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            red: self.red.clamp(0, 255),
            green: self.green.clamp(0, 255),
            blue: self.blue.clamp(0, 255),
        }
    }

    /// Whether every channel already fits in a byte.
    #[must_use]
    pub fn in_byte_range(self) -> bool {
        self == self.clamped()
    }

    /// CSS `rgb()` functional notation.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Coarse health band used for gauge captions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HealthBand {
    /// Score at or below 20 (or not a number).
    Critical,
    /// Score strictly between 20 and 50.
    Warning,
    /// Score of 50 or above.
    Healthy,
}

impl HealthBand {
    /// Band for a raw score.
    #[must_use]
    pub fn for_score(health: f64) -> Self {
        if health.is_nan() || health <= CRITICAL_CEILING {
            Self::Critical
        } else if health < HEALTHY_FLOOR {
            Self::Warning
        } else {
            Self::Healthy
        }
    }

    /// Lowercase label for captions and CSS hooks.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Healthy => "healthy",
        }
    }
}

/// Map a health score to its gauge colour.
#[must_use]
pub fn color_for(health: f64) -> Rgb {
    match HealthBand::for_score(health) {
        HealthBand::Critical => Rgb::new(255, 0, 0),
        HealthBand::Warning => Rgb::new(WARNING_RED, round_half_up(CHANNEL_SLOPE * health), 0),
        HealthBand::Healthy => {
            let fade = round_half_up(CHANNEL_SLOPE * (health - HEALTHY_FLOOR));
            Rgb::new(WARNING_RED.saturating_sub(fade), HEALTHY_GREEN, 0)
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i32 {
    // Float-to-int casts saturate, so infinite scores stay ordered.
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_band_is_pure_red() {
        assert_eq!(color_for(0.0), Rgb::new(255, 0, 0));
        assert_eq!(color_for(20.0), Rgb::new(255, 0, 0));
        assert_eq!(color_for(-15.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn red_steps_down_just_above_twenty() {
        let color = color_for(20.0001);
        assert_eq!(color.red, 225);
        assert_eq!(color.green, 102);
        assert_eq!(color.blue, 0);
    }

    #[test]
    fn warning_band_ramps_green() {
        assert_eq!(color_for(30.0), Rgb::new(225, 153, 0));
        assert_eq!(color_for(49.9), Rgb::new(225, 254, 0));
    }

    #[test]
    fn fifty_uses_the_healthy_band() {
        assert_eq!(color_for(50.0), Rgb::new(225, 166, 0));
        assert_eq!(HealthBand::for_score(50.0), HealthBand::Healthy);
    }

    #[test]
    fn healthy_band_fades_red() {
        assert_eq!(color_for(60.0), Rgb::new(174, 166, 0));
        assert_eq!(color_for(94.0), Rgb::new(1, 166, 0));
    }

    #[test]
    fn full_health_overflows_red_below_zero() {
        let color = color_for(100.0);
        assert_eq!(color, Rgb::new(-30, 166, 0));
        assert!(!color.in_byte_range());
        assert_eq!(color.clamped(), Rgb::new(0, 166, 0));
    }

    #[test]
    fn scores_above_range_are_not_clamped() {
        assert_eq!(color_for(150.0), Rgb::new(-285, 166, 0));
    }

    #[test]
    fn nan_reads_as_critical() {
        assert_eq!(color_for(f64::NAN), Rgb::new(255, 0, 0));
        assert_eq!(HealthBand::for_score(f64::NAN), HealthBand::Critical);
    }

    #[test]
    fn mapping_is_deterministic() {
        for score in [0.0, 12.5, 20.0, 33.3, 50.0, 77.7, 100.0] {
            assert_eq!(color_for(score), color_for(score));
        }
    }

    #[test]
    fn css_notation_matches_channels() {
        assert_eq!(Rgb::new(225, 166, 0).to_css(), "rgb(225, 166, 0)");
        assert_eq!(color_for(100.0).to_string(), "rgb(-30, 166, 0)");
    }

    #[test]
    fn bands_split_at_twenty_and_fifty() {
        assert_eq!(HealthBand::for_score(20.0), HealthBand::Critical);
        assert_eq!(HealthBand::for_score(20.5), HealthBand::Warning);
        assert_eq!(HealthBand::for_score(49.99), HealthBand::Warning);
        assert_eq!(HealthBand::Warning.as_str(), "warning");
    }
}
