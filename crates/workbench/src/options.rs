use graphql_config::WorkbenchConfig;
use std::fmt;

/// Callback invoked with the new editor text before it is stored.
pub type EditHook = Box<dyn FnMut(&str) + Send>;

/// Construction-time settings for a [`crate::Workbench`].
pub struct WorkbenchOptions {
    pub server_url: String,
    pub query: String,
    pub variables: String,
    pub explorer_is_open: bool,
    pub exporter_is_open: bool,
    pub disable_explorer: bool,
    pub disable_exporter: bool,
    pub on_edit_query: Option<EditHook>,
    pub on_edit_variables: Option<EditHook>,
}

impl WorkbenchOptions {
    #[must_use]
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            query: String::new(),
            variables: String::new(),
            explorer_is_open: false,
            exporter_is_open: false,
            disable_explorer: false,
            disable_exporter: false,
            on_edit_query: None,
            on_edit_variables: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn on_edit_query(mut self, hook: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_edit_query = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_edit_variables(mut self, hook: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_edit_variables = Some(Box::new(hook));
        self
    }
}

impl From<&WorkbenchConfig> for WorkbenchOptions {
    fn from(config: &WorkbenchConfig) -> Self {
        Self {
            server_url: config.server_url.clone(),
            query: config.query.clone().unwrap_or_default(),
            variables: config.variables.clone().unwrap_or_default(),
            explorer_is_open: config.explorer_is_open,
            exporter_is_open: config.exporter_is_open,
            disable_explorer: config.disable_explorer,
            disable_exporter: config.disable_exporter,
            on_edit_query: None,
            on_edit_variables: None,
        }
    }
}

impl fmt::Debug for WorkbenchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkbenchOptions")
            .field("server_url", &self.server_url)
            .field("query", &self.query)
            .field("variables", &self.variables)
            .field("explorer_is_open", &self.explorer_is_open)
            .field("exporter_is_open", &self.exporter_is_open)
            .field("disable_explorer", &self.disable_explorer)
            .field("disable_exporter", &self.disable_exporter)
            .field("on_edit_query", &self.on_edit_query.is_some())
            .field("on_edit_variables", &self.on_edit_variables.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = WorkbenchConfig::new("http://localhost:4000");
        config.query = Some("{ a }".to_string());
        config.exporter_is_open = true;
        config.disable_explorer = true;

        let options = WorkbenchOptions::from(&config);
        assert_eq!(options.server_url, "http://localhost:4000");
        assert_eq!(options.query, "{ a }");
        assert_eq!(options.variables, "");
        assert!(options.exporter_is_open);
        assert!(options.disable_explorer);
        assert!(!options.explorer_is_open);
        assert!(options.on_edit_query.is_none());
    }
}
