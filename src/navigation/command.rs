//! Navigation commands and the framework adapter that performs them.

use crate::error::Result;

/// How a presented controller covers the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationStyle {
    #[default]
    FullScreen,
    OverFullScreen,
    PageSheet,
    FormSheet,
    /// Let the framework choose.
    Automatic,
}

/// Animation used when presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    CoverVertical,
    CrossDissolve,
}

/// A simple alert with a title, optional message and buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: Option<String>,
    pub actions: Vec<String>,
}

impl Alert {
    /// An alert with a single "OK" button.
    pub fn ok(title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            title: title.into(),
            message,
            actions: vec!["OK".to_string()],
        }
    }
}

/// A navigation request against controllers of type `C`.
#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand<C> {
    Push {
        target: C,
        hides_bottom_bar: bool,
        animated: bool,
    },
    Pop {
        animated: bool,
    },
    Present {
        target: C,
        style: PresentationStyle,
        transition: Transition,
        /// `false` presents over a clear background.
        opaque: bool,
        animated: bool,
    },
    Dismiss {
        animated: bool,
    },
    PopToRoot {
        animated: bool,
    },
    /// Swap the window's root controller, cross-dissolving when animated.
    ReplaceRoot {
        target: C,
        animated: bool,
    },
    ShowAlert(Alert),
}

impl<C> NavCommand<C> {
    /// Push without animation, hiding the bottom bar.
    pub fn push(target: C) -> Self {
        NavCommand::Push {
            target,
            hides_bottom_bar: true,
            animated: false,
        }
    }

    /// Pop without animation.
    pub fn pop() -> Self {
        NavCommand::Pop { animated: false }
    }

    /// Present full screen, animated.
    pub fn present(target: C) -> Self {
        Self::present_with(target, Some(PresentationStyle::FullScreen), true)
    }

    /// Present with an explicit style. `None` leaves the choice to the
    /// framework.
    pub fn present_with(target: C, style: Option<PresentationStyle>, animated: bool) -> Self {
        NavCommand::Present {
            target,
            style: style.unwrap_or(PresentationStyle::Automatic),
            transition: Transition::default(),
            opaque: true,
            animated,
        }
    }

    /// Fade in over the current content with a clear background.
    pub fn present_cross_dissolve(target: C) -> Self {
        NavCommand::Present {
            target,
            style: PresentationStyle::OverFullScreen,
            transition: Transition::CrossDissolve,
            opaque: false,
            animated: true,
        }
    }

    pub fn dismiss() -> Self {
        NavCommand::Dismiss { animated: true }
    }

    pub fn pop_to_root(animated: bool) -> Self {
        NavCommand::PopToRoot { animated }
    }

    pub fn replace_root(target: C, animated: bool) -> Self {
        NavCommand::ReplaceRoot { target, animated }
    }

    pub fn alert(title: impl Into<String>, message: Option<String>) -> Self {
        NavCommand::ShowAlert(Alert::ok(title, message))
    }
}

/// Performs navigation commands for one UI framework.
///
/// Implementations must only be driven from the thread that owns the UI.
pub trait Navigator {
    type Controller;

    fn perform(&mut self, command: NavCommand<Self::Controller>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_hides_bottom_bar() {
        assert_eq!(
            NavCommand::push("detail"),
            NavCommand::Push { target: "detail", hides_bottom_bar: true, animated: false }
        );
    }

    #[test]
    fn test_present_styles() {
        match NavCommand::present("modal") {
            NavCommand::Present { style, animated, opaque, .. } => {
                assert_eq!(style, PresentationStyle::FullScreen);
                assert!(animated);
                assert!(opaque);
            }
            other => panic!("unexpected {other:?}"),
        }

        match NavCommand::present_with("sheet", None, false) {
            NavCommand::Present { style, animated, .. } => {
                assert_eq!(style, PresentationStyle::Automatic);
                assert!(!animated);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_cross_dissolve() {
        assert_eq!(
            NavCommand::present_cross_dissolve("overlay"),
            NavCommand::Present {
                target: "overlay",
                style: PresentationStyle::OverFullScreen,
                transition: Transition::CrossDissolve,
                opaque: false,
                animated: true,
            }
        );
    }

    #[test]
    fn test_alert_has_ok_action() {
        let cmd: NavCommand<()> = NavCommand::alert("Saved", None);
        assert_eq!(
            cmd,
            NavCommand::ShowAlert(Alert {
                title: "Saved".to_string(),
                message: None,
                actions: vec!["OK".to_string()],
            })
        );
    }
}
