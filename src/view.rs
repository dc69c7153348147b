//! Render tree for the counter view and its terminal rendering.
//!
//! [`render`] is a pure function of the counter. [`Theme`] turns the tree
//! into the string bubbletea draws, one node per line.

use lipgloss::Style;

pub const HEADING: &str = "This is frontend";
pub const SUBHEADING: &str = "Test volume3";
pub const CONTROL_LABEL: &str = "Click me";
const HELP: &str = "enter/space/click: click me | q: quit";

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Emphasis(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading(String),
    Subheading(String),
    Control { label: String },
    Paragraph(Vec<Span>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTree {
    pub nodes: Vec<Node>,
}

/// Build the view for `count`.
#[must_use]
pub fn render(count: i64) -> ViewTree {
    ViewTree {
        nodes: vec![
            Node::Heading(HEADING.to_string()),
            Node::Subheading(SUBHEADING.to_string()),
            Node::Control {
                label: CONTROL_LABEL.to_string(),
            },
            Node::Paragraph(vec![
                Span::Text("You have clicked the button ".to_string()),
                Span::Emphasis(count.to_string()),
                Span::Text(" times.".to_string()),
            ]),
        ],
    }
}

/// Terminal styling for a [`ViewTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    styled: bool,
}

impl Theme {
    #[must_use]
    pub const fn styled() -> Self {
        Self { styled: true }
    }

    /// No escape codes; used for `--plain`, headless output and tests.
    #[must_use]
    pub const fn plain() -> Self {
        Self { styled: false }
    }

    /// Render the tree followed by the key help line.
    #[must_use]
    pub fn render(self, tree: &ViewTree) -> String {
        let body = self.render_body(tree);
        let help = self.paint(&Style::new().faint(), HELP);
        format!("{body}\n\n{help}")
    }

    /// Render the tree alone, nodes separated by a blank line.
    #[must_use]
    pub fn render_body(self, tree: &ViewTree) -> String {
        tree.nodes
            .iter()
            .map(|node| self.node(node))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// 0-based output line of the first control, matching [`Theme::render`].
    ///
    /// Counts lines of the rendered string, not terminal rows: if the terminal
    /// is narrow enough to wrap a line above the control, the row reported
    /// here is too small and mouse presses on the control are missed.
    #[must_use]
    pub fn control_row(self, tree: &ViewTree) -> Option<usize> {
        tree.nodes
            .iter()
            .position(|node| matches!(node, Node::Control { .. }))
            .map(|index| index * 2)
    }

    fn node(self, node: &Node) -> String {
        match node {
            Node::Heading(text) => self.paint(&Style::new().bold().foreground("#7D56F4"), text),
            Node::Subheading(text) => self.paint(&Style::new().foreground("#FF69B4"), text),
            Node::Control { label } => {
                let button = format!("[ {label} ]");
                self.paint(&Style::new().bold().foreground("212"), &button)
            }
            Node::Paragraph(spans) => spans
                .iter()
                .map(|span| match span {
                    Span::Text(text) => text.clone(),
                    Span::Emphasis(text) => self.paint(&Style::new().bold(), text),
                })
                .collect(),
        }
    }

    fn paint(self, style: &Style, text: &str) -> String {
        if self.styled {
            style.render(text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::styled()
    }
}
