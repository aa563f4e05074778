//! uxkit - toolkit-independent UI helpers
//!
//! Small, stateless building blocks that UI code tends to reinvent: safe
//! indexed lookup, hex colour parsing, attributed text, entity decoding,
//! date and locale helpers, and adapters for driving navigation from any
//! thread while running it on the UI thread.

pub mod apply;
pub mod cli;
pub mod collection;
pub mod config;
pub mod date;
pub mod device;
pub mod error;
pub mod navigation;
pub mod output;
pub mod text;
pub mod types;

pub use apply::Apply;
pub use collection::{safe_get, SafeGet};
pub use config::Config;
pub use date::{format_date, format_date_with};
pub use device::{
    has_home_button, is_big_device, is_english, is_little_device, is_pad, DeviceThresholds, Idiom,
    ScreenMetrics,
};
pub use error::{KitError, Result};
pub use navigation::{top_most, NavCommand, Navigator, Presentable, UiHandle, UiQueue};
pub use text::{decode_html_entities, AttributedText, Strings, TextStyle};
pub use types::{parse_hex_color, Colour, Rgba};
