use crate::options::EditHook;
use crate::{InspectError, Panel, ToolbarAction, ToolbarButton, WorkbenchOptions};
use graphql_introspect::{fetch_client_schema, ClientSchema, Fetcher};
use graphql_locator::{inspect, ClickPosition, Navigator, TargetIdentifier};
use std::fmt;

/// Live state of one workbench.
pub struct Workbench {
    server_url: String,
    query: String,
    variables: String,
    schema: Option<ClientSchema>,
    explorer_is_open: bool,
    exporter_is_open: bool,
    disable_explorer: bool,
    disable_exporter: bool,
    on_edit_query: Option<EditHook>,
    on_edit_variables: Option<EditHook>,
}

impl Workbench {
    #[must_use]
    pub fn new(options: WorkbenchOptions) -> Self {
        Self {
            server_url: options.server_url,
            query: options.query,
            variables: options.variables,
            schema: None,
            explorer_is_open: options.explorer_is_open,
            exporter_is_open: options.exporter_is_open,
            disable_explorer: options.disable_explorer,
            disable_exporter: options.disable_exporter,
            on_edit_query: options.on_edit_query,
            on_edit_variables: options.on_edit_variables,
        }
    }

    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn variables(&self) -> &str {
        &self.variables
    }

    #[must_use]
    pub fn schema(&self) -> Option<&ClientSchema> {
        self.schema.as_ref()
    }

    #[must_use]
    pub fn explorer_is_open(&self) -> bool {
        self.explorer_is_open
    }

    #[must_use]
    pub fn exporter_is_open(&self) -> bool {
        self.exporter_is_open
    }

    /// Handle new query text from the editor or the explorer.
    pub fn edit_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if let Some(hook) = self.on_edit_query.as_mut() {
            hook(&query);
        }
        self.query = query;
    }

    /// Handle new variables text from the variables editor.
    pub fn edit_variables(&mut self, variables: impl Into<String>) {
        let variables = variables.into();
        if let Some(hook) = self.on_edit_variables.as_mut() {
            hook(&variables);
        }
        self.variables = variables;
    }

    pub fn toggle_explorer(&mut self) {
        self.explorer_is_open = !self.explorer_is_open;
        tracing::debug!(open = self.explorer_is_open, "Toggled explorer");
    }

    pub fn toggle_exporter(&mut self) {
        self.exporter_is_open = !self.exporter_is_open;
        tracing::debug!(open = self.exporter_is_open, "Toggled exporter");
    }

    /// Dispatch a toolbar press. Returns false for actions the host
    /// editor performs itself (prettify and history).
    pub fn press(&mut self, action: ToolbarAction) -> bool {
        match action {
            ToolbarAction::ToggleExplorer => self.toggle_explorer(),
            ToolbarAction::ToggleExporter => self.toggle_exporter(),
            ToolbarAction::Prettify | ToolbarAction::History => return false,
        }
        true
    }

    /// Fetch the schema through `fetcher` and keep it for the explorer.
    ///
    /// Failures are logged and leave any previous schema in place. Returns
    /// whether a new schema was stored.
    #[tracing::instrument(skip(self, fetcher), fields(server_url = %self.server_url))]
    pub async fn load_schema<F: Fetcher>(&mut self, fetcher: &F) -> bool {
        match fetch_client_schema(fetcher).await {
            Ok(schema) => {
                tracing::info!(types = schema.type_names().len(), "Schema loaded");
                self.schema = Some(schema);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load schema");
                false
            }
        }
    }

    /// Scroll the explorer to the definition under `click`.
    ///
    /// # Errors
    ///
    /// Returns [`InspectError::SchemaNotLoaded`] before the first successful
    /// [`Workbench::load_schema`], and [`InspectError::Lookup`] when the
    /// click does not resolve to a definition.
    pub fn inspect_operation(
        &self,
        click: ClickPosition,
        navigator: &mut dyn Navigator,
    ) -> Result<TargetIdentifier, InspectError> {
        if self.schema.is_none() {
            tracing::debug!("Ignoring inspect request before schema load");
            return Err(InspectError::SchemaNotLoaded);
        }
        Ok(inspect(&self.query, click, navigator)?)
    }

    /// Panels to render, in order.
    #[must_use]
    pub fn panels(&self) -> Vec<Panel> {
        let mut panels = Vec::with_capacity(3);
        if !self.disable_explorer {
            panels.push(Panel::Explorer {
                open: self.explorer_is_open,
                schema_loaded: self.schema.is_some(),
            });
        }
        panels.push(Panel::Ide);
        if self.exporter_is_open && !self.disable_exporter {
            panels.push(Panel::Exporter {
                server_url: self.server_url.clone(),
                query: self.query.clone(),
            });
        }
        panels
    }

    /// Toolbar buttons, in order.
    #[must_use]
    pub fn toolbar(&self) -> Vec<ToolbarButton> {
        let mut buttons = vec![ToolbarButton::PRETTIFY, ToolbarButton::HISTORY];
        if !self.disable_explorer {
            buttons.push(ToolbarButton::EXPLORER);
        }
        if !self.disable_exporter {
            buttons.push(ToolbarButton::EXPORTER);
        }
        buttons
    }
}

impl fmt::Debug for Workbench {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbench")
            .field("server_url", &self.server_url)
            .field("query", &self.query)
            .field("variables", &self.variables)
            .field("schema_loaded", &self.schema.is_some())
            .field("explorer_is_open", &self.explorer_is_open)
            .field("exporter_is_open", &self.exporter_is_open)
            .field("disable_explorer", &self.disable_explorer)
            .field("disable_exporter", &self.disable_exporter)
            .finish_non_exhaustive()
    }
}
