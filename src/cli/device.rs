//! Device command: classify a screen from explicit metrics.

use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::device::{
    has_home_button, is_big_device, is_english, is_little_device, is_pad, Idiom, ScreenMetrics,
};
use crate::error::{KitError, Result};

/// Classify a screen from its metrics
#[derive(Args, Debug)]
pub struct DeviceArgs {
    /// Screen height in points
    #[arg(long)]
    pub height: f64,

    /// Top safe-area inset in points
    #[arg(long, default_value = "0")]
    pub safe_area_top: f64,

    /// Device idiom
    #[arg(long, value_enum, default_value = "phone")]
    pub idiom: IdiomArg,

    /// Language tag, e.g. en-GB
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum IdiomArg {
    Phone,
    Pad,
    Tv,
    Desktop,
}

impl From<IdiomArg> for Idiom {
    fn from(arg: IdiomArg) -> Self {
        match arg {
            IdiomArg::Phone => Idiom::Phone,
            IdiomArg::Pad => Idiom::Pad,
            IdiomArg::Tv => Idiom::Tv,
            IdiomArg::Desktop => Idiom::Desktop,
        }
    }
}

/// Classification printed by the command.
#[derive(Debug, PartialEq, Serialize)]
pub struct DeviceReport {
    pub little: bool,
    pub big: bool,
    pub home_button: bool,
    pub pad: bool,
    pub english: bool,
}

pub fn classify(args: &DeviceArgs, config: &Config) -> DeviceReport {
    let metrics = ScreenMetrics {
        height: args.height,
        safe_area_top: args.safe_area_top,
    };
    let thresholds = &config.device;
    DeviceReport {
        little: is_little_device(&metrics, thresholds),
        big: is_big_device(&metrics, thresholds),
        home_button: has_home_button(Some(&metrics), thresholds),
        pad: is_pad(args.idiom.into()),
        english: is_english(&args.lang),
    }
}

pub fn run(args: DeviceArgs, config: &Config) -> Result<()> {
    let report = classify(&args, config);

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| KitError::Parse {
            message: format!("Failed to encode JSON: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        println!("little       {}", report.little);
        println!("big          {}", report.big);
        println!("home_button  {}", report.home_button);
        println!("pad          {}", report.pad);
        println!("english      {}", report.english);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(height: f64, safe_area_top: f64) -> DeviceArgs {
        DeviceArgs {
            height,
            safe_area_top,
            idiom: IdiomArg::Phone,
            lang: "en-US".to_string(),
            json: false,
        }
    }

    #[test]
    fn test_classify_small_phone() {
        let report = classify(&args(667.0, 20.0), &Config::default());
        assert_eq!(
            report,
            DeviceReport { little: true, big: false, home_button: true, pad: false, english: true }
        );
    }

    #[test]
    fn test_classify_uses_config_thresholds() {
        let mut config = Config::default();
        config.device.big_from = 800.0;
        let report = classify(&args(844.0, 47.0), &config);
        assert!(report.big);
        assert!(!report.home_button);
    }
}
