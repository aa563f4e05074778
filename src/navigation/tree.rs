//! Resolving the top-most controller of a presentation hierarchy.

/// What kind of container a controller is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerKind {
    #[default]
    Plain,
    /// A stack container; descends into its visible controller.
    Navigation,
    /// A tab container; descends into its selected controller.
    Tab,
}

/// Adapter over a UI framework's view-controller hierarchy.
pub trait Presentable {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Plain
    }

    /// The visible child of a navigation container.
    fn visible(&self) -> Option<&Self> {
        None
    }

    /// The selected child of a tab container.
    fn selected(&self) -> Option<&Self> {
        None
    }

    /// A controller presented modally over this one.
    fn presented(&self) -> Option<&Self> {
        None
    }
}

/// Walk from `root` to the controller currently on top.
///
/// Navigation containers resolve to their visible child (and to nothing if
/// they have none), tab containers to their selected child when there is one,
/// and any controller with a modal presentation to the presented one.
pub fn top_most<P: Presentable>(root: Option<&P>) -> Option<&P> {
    let mut current = root?;
    loop {
        let next = match current.kind() {
            ContainerKind::Navigation => Some(current.visible()?),
            ContainerKind::Tab => current.selected(),
            ContainerKind::Plain => None,
        };
        current = match next.or_else(|| current.presented()) {
            Some(next) => next,
            None => return Some(current),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Node {
        name: &'static str,
        kind: ContainerKind,
        stack: Vec<Node>,
        tabs: Vec<Node>,
        selected: Option<usize>,
        presented: Option<Box<Node>>,
    }

    impl Node {
        fn plain(name: &'static str) -> Self {
            Self { name, ..Default::default() }
        }

        fn nav(name: &'static str, stack: Vec<Node>) -> Self {
            Self { name, kind: ContainerKind::Navigation, stack, ..Default::default() }
        }

        fn tabs(name: &'static str, tabs: Vec<Node>, selected: Option<usize>) -> Self {
            Self { name, kind: ContainerKind::Tab, tabs, selected, ..Default::default() }
        }

        fn presenting(mut self, other: Node) -> Self {
            self.presented = Some(Box::new(other));
            self
        }
    }

    impl Presentable for Node {
        fn kind(&self) -> ContainerKind {
            self.kind
        }

        fn visible(&self) -> Option<&Self> {
            self.stack.last()
        }

        fn selected(&self) -> Option<&Self> {
            self.selected.and_then(|i| self.tabs.get(i))
        }

        fn presented(&self) -> Option<&Self> {
            self.presented.as_deref()
        }
    }

    fn top_name(root: &Node) -> Option<&'static str> {
        top_most(Some(root)).map(|n| n.name)
    }

    #[test]
    fn test_plain_root() {
        assert_eq!(top_name(&Node::plain("root")), Some("root"));
        assert!(top_most::<Node>(None).is_none());
    }

    #[test]
    fn test_navigation_stack() {
        let root = Node::nav("nav", vec![Node::plain("list"), Node::plain("detail")]);
        assert_eq!(top_name(&root), Some("detail"));
    }

    #[test]
    fn test_empty_navigation_has_no_top() {
        let root = Node::nav("nav", vec![]).presenting(Node::plain("modal"));
        assert_eq!(top_name(&root), None);
    }

    #[test]
    fn test_tabs() {
        let root = Node::tabs(
            "tabs",
            vec![Node::plain("home"), Node::nav("settings", vec![Node::plain("account")])],
            Some(1),
        );
        assert_eq!(top_name(&root), Some("account"));
    }

    #[test]
    fn test_tabs_without_selection_falls_through() {
        let root = Node::tabs("tabs", vec![Node::plain("home")], None);
        assert_eq!(top_name(&root), Some("tabs"));

        let root = Node::tabs("tabs", vec![], None).presenting(Node::plain("sheet"));
        assert_eq!(top_name(&root), Some("sheet"));
    }

    #[test]
    fn test_presented_chain() {
        let root = Node::plain("root")
            .presenting(Node::plain("first").presenting(Node::plain("second")));
        assert_eq!(top_name(&root), Some("second"));
    }
}
