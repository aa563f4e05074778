//! Navigation adapters.
//!
//! The UI framework plugs in through two traits:
//! - `Presentable` - read access to the controller hierarchy
//! - `Navigator` - performs push/present/dismiss requests
//!
//! `UiQueue` moves requests from worker threads to the UI thread.

mod command;
mod queue;
mod tree;

pub use command::{Alert, NavCommand, Navigator, PresentationStyle, Transition};
pub use queue::{UiHandle, UiQueue};
pub use tree::{top_most, ContainerKind, Presentable};
