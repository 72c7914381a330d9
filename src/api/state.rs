//! Application state for the finance calculation API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the tax tables and engine defaults loaded at startup. Cloning is
/// cheap; every handler sees the same configuration.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilingStatus;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = AppState::new(ConfigLoader::load("./config/us_2023").unwrap());
        let other = state.clone();
        assert!(std::ptr::eq(state.config(), other.config()));
        assert_eq!(
            other.config().bracket_table(FilingStatus::Single).top_rate(),
            37.0
        );
    }
}
