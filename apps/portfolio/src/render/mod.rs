// Presentation layer. Layouts bind to `ViewState` and never fetch anything
// themselves; adding a layout means implementing `Layout` and registering it
// in `LayoutKind`.

pub mod html;
pub mod sidebar;
pub mod stacked;

use std::fmt;
use std::str::FromStr;

use crate::models::resume::ResumeRecord;
use crate::view::ViewState;

pub use sidebar::SidebarLayout;
pub use stacked::StackedLayout;

/// A renderer for the resume view.
pub trait Layout: Send + Sync {
    fn name(&self) -> &'static str;

    /// Body markup for a successfully loaded record.
    fn render_record(&self, record: &ResumeRecord) -> String;

    /// Full HTML document for any view state. Loading and error screens are
    /// the same for every layout.
    fn render(&self, state: &ViewState) -> String {
        let body = match state {
            ViewState::Loading => html::loading(),
            ViewState::Error(message) => html::error(message),
            ViewState::Loaded(record) => self.render_record(record),
        };
        html::document(&body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    #[default]
    Sidebar,
    Stacked,
}

impl LayoutKind {
    pub fn layout(self) -> &'static dyn Layout {
        match self {
            LayoutKind::Sidebar => &SidebarLayout,
            LayoutKind::Stacked => &StackedLayout,
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.layout().name())
    }
}

impl FromStr for LayoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sidebar" => Ok(LayoutKind::Sidebar),
            "stacked" => Ok(LayoutKind::Stacked),
            other => Err(format!("Unknown layout '{other}'")),
        }
    }
}
