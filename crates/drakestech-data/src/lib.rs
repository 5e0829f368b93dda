pub mod loader;
pub mod overrides;

pub use loader::{DataLoadError, Format};
pub use overrides::{DEFAULT_SEARCH_DIR, LoadedConfig, OVERRIDE_BASE_NAME, load_config};
