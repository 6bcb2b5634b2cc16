use std::sync::Arc;

use pasieka_analytics::DashboardConfig;
use pasieka_assistant::Assistant;
use pasieka_infra::EntityStore;

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<dyn EntityStore>,
    assistant: Arc<dyn Assistant>,
    dashboard: DashboardConfig,
}

impl AppContext {
    pub fn new(
        store: Arc<dyn EntityStore>,
        assistant: Arc<dyn Assistant>,
        dashboard: DashboardConfig,
    ) -> Self {
        Self {
            store,
            assistant,
            dashboard,
        }
    }

    pub fn store(&self) -> &dyn EntityStore {
        self.store.as_ref()
    }

    pub fn assistant(&self) -> &dyn Assistant {
        self.assistant.as_ref()
    }

    pub fn dashboard_config(&self) -> &DashboardConfig {
        &self.dashboard
    }

    /// Seller credited on orders placed without one.
    pub fn default_seller(&self) -> &str {
        self.dashboard
            .sellers
            .first()
            .map(String::as_str)
            .unwrap_or("Kacper")
    }
}
