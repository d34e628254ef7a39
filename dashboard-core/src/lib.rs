pub mod config;
pub mod error;
pub mod icon;
pub mod nav;
pub mod sidebar;
pub mod stats;
pub mod store;
pub mod theme;

pub use config::{DashboardConfig, UserProfile};
pub use error::{ConfigError, ParseThemeError, StoreError};
pub use icon::Icon;
pub use nav::{NavItem, NAVIGATION};
pub use sidebar::SidebarState;
pub use stats::{StatMetric, STATS};
pub use store::{MemoryStore, PreferenceStore};
pub use theme::{resolve_initial_theme, Theme, ThemeController, THEME_STORAGE_KEY};
