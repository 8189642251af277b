/// A panel the host should render, in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Schema explorer. Rendered collapsed when `open` is false.
    Explorer { open: bool, schema_loaded: bool },
    /// Query editor, variables editor and results.
    Ide,
    /// Code exporter for the current query.
    Exporter { server_url: String, query: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    Prettify,
    History,
    ToggleExplorer,
    ToggleExporter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    pub action: ToolbarAction,
    pub label: &'static str,
    pub title: &'static str,
}

impl ToolbarButton {
    pub(crate) const PRETTIFY: Self = Self {
        action: ToolbarAction::Prettify,
        label: "Prettify",
        title: "Prettify Query (Shift-Ctrl-P)",
    };
    pub(crate) const HISTORY: Self = Self {
        action: ToolbarAction::History,
        label: "History",
        title: "Show History",
    };
    pub(crate) const EXPLORER: Self = Self {
        action: ToolbarAction::ToggleExplorer,
        label: "Explorer",
        title: "Toggle Explorer",
    };
    pub(crate) const EXPORTER: Self = Self {
        action: ToolbarAction::ToggleExporter,
        label: "Exporter",
        title: "Toggle Exporter",
    };
}
