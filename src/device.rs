//! Device and locale queries.
//!
//! Every query takes the metrics it depends on as a parameter; nothing here
//! is computed once and cached process-wide.

use serde::{Deserialize, Serialize};

/// Window metrics reported by the UI framework, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub height: f64,
    pub safe_area_top: f64,
}

/// Broad device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Idiom {
    Phone,
    Pad,
    Tv,
    Desktop,
}

/// Limits used to classify screens by height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceThresholds {
    /// Screens shorter than this are "little".
    pub little_below: f64,
    /// Screens at least this tall are "big".
    pub big_from: f64,
    /// A top safe-area inset at or below this means a physical home button.
    pub home_button_max_inset: f64,
}

impl Default for DeviceThresholds {
    fn default() -> Self {
        Self {
            little_below: 852.0,
            big_from: 874.0,
            home_button_max_inset: 20.0,
        }
    }
}

pub fn is_little_device(metrics: &ScreenMetrics, thresholds: &DeviceThresholds) -> bool {
    metrics.height < thresholds.little_below
}

pub fn is_big_device(metrics: &ScreenMetrics, thresholds: &DeviceThresholds) -> bool {
    metrics.height >= thresholds.big_from
}

/// Whether the device has a home button, judged by the top safe-area inset.
///
/// With no window to measure, assumes it does.
pub fn has_home_button(metrics: Option<&ScreenMetrics>, thresholds: &DeviceThresholds) -> bool {
    metrics.map_or(true, |m| m.safe_area_top <= thresholds.home_button_max_inset)
}

pub fn is_pad(idiom: Idiom) -> bool {
    idiom == Idiom::Pad
}

/// Whether a BCP 47 language tag (`en`, `en-GB`, `en_US`) is English.
pub fn is_english(language_tag: &str) -> bool {
    language_tag
        .split(['-', '_'])
        .next()
        .is_some_and(|primary| primary.eq_ignore_ascii_case("en"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(height: f64, safe_area_top: f64) -> ScreenMetrics {
        ScreenMetrics { height, safe_area_top }
    }

    #[test]
    fn test_size_classes() {
        let t = DeviceThresholds::default();
        assert!(is_little_device(&screen(667.0, 20.0), &t));
        assert!(!is_little_device(&screen(852.0, 59.0), &t));
        assert!(!is_big_device(&screen(852.0, 59.0), &t));
        assert!(is_big_device(&screen(874.0, 62.0), &t));
        assert!(is_big_device(&screen(956.0, 62.0), &t));
    }

    #[test]
    fn test_home_button() {
        let t = DeviceThresholds::default();
        assert!(has_home_button(Some(&screen(667.0, 20.0)), &t));
        assert!(!has_home_button(Some(&screen(844.0, 47.0)), &t));
        assert!(has_home_button(None, &t));
    }

    #[test]
    fn test_custom_thresholds() {
        let t = DeviceThresholds { little_below: 700.0, ..Default::default() };
        assert!(!is_little_device(&screen(700.0, 0.0), &t));
    }

    #[test]
    fn test_idiom() {
        assert!(is_pad(Idiom::Pad));
        assert!(!is_pad(Idiom::Phone));
    }

    #[test]
    fn test_is_english() {
        assert!(is_english("en"));
        assert!(is_english("EN-gb"));
        assert!(is_english("en_US"));
        assert!(!is_english("eng"));
        assert!(!is_english("fr"));
        assert!(!is_english(""));
    }
}
