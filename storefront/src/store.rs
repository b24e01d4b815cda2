//! Reactive wrapper around the storefront state.

use gramgro_commerce::prelude::*;
use gramgro_observability::{LogLevel, LogWriter, SessionLogger};
use leptos::prelude::*;

const CONFIG_TOML: &str = include_str!("../gramgro.toml");

/// Shared handle to the state signal and the session logger.
///
/// Components get it from context and send every change through
/// [`Store::dispatch`].
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
    logger: StoredValue<SessionLogger>,
}

impl Store {
    pub fn new(state: AppState, logger: SessionLogger) -> Self {
        Self {
            state: RwSignal::new(state),
            logger: StoredValue::new(logger),
        }
    }

    /// Run the reducer and log the action.
    pub fn dispatch(&self, action: Action) {
        let mut changed = false;
        let logged = action.clone();
        self.state.update(|state| changed = state.dispatch(action));

        let view = self.state.with_untracked(|state| state.view());
        self.logger
            .with_value(|logger| logger.clone().with_view(view).action(&logged, changed));
    }

    /// Tracked read of the state.
    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with(f)
    }

    pub fn currency(&self) -> Currency {
        self.state.with_untracked(|state| state.currency())
    }
}

/// Get the store provided by the root component.
pub fn use_store() -> Store {
    expect_context::<Store>()
}

/// Parse the embedded configuration, falling back to defaults.
pub fn load_config() -> (StorefrontConfig, Option<CommerceError>) {
    match StorefrontConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => (config, None),
        Err(e) => (StorefrontConfig::default(), Some(e)),
    }
}

/// Session logger writing to the browser console.
pub fn console_logger(config: &StorefrontConfig) -> SessionLogger {
    let writer = LogWriter::new(|level, line| match level {
        LogLevel::Warn => leptos::logging::warn!("{}", line),
        LogLevel::Error => leptos::logging::error!("{}", line),
        _ => leptos::logging::log!("{}", line),
    });
    SessionLogger::from_config(SessionId::next(), &config.logging).with_writer(writer)
}

/// Load the bundled catalog. An unreadable catalog yields an empty shop.
pub fn load_catalog(logger: &SessionLogger) -> Catalog {
    match Catalog::builtin() {
        Ok(catalog) => {
            logger
                .info_builder("catalog loaded")
                .field_u64("products", catalog.len() as u64)
                .emit();
            catalog
        }
        Err(e) => {
            logger.error_with("catalog failed to load", &[("error", &e)]);
            Catalog::default()
        }
    }
}
