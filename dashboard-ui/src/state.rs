use crate::host::{self, BrowserStore};
use dashboard_core::{DashboardConfig, Theme, ThemeController};
use leptos::*;

/// Theme threaded through context instead of mutating the document root.
#[derive(Clone, Copy)]
pub struct ThemeCtx {
    controller: RwSignal<ThemeController<BrowserStore>>,
}

impl ThemeCtx {
    pub fn theme(&self) -> Theme {
        self.controller.with(|c| c.theme())
    }

    pub fn toggle(&self) {
        self.controller.update(|c| {
            c.toggle();
        });
    }
}

pub fn provide_theme_context(config: &DashboardConfig) -> ThemeCtx {
    let controller = ThemeController::load(
        BrowserStore::default(),
        config.theme_storage_key.clone(),
        host::prefers_dark(),
    );
    let ctx = ThemeCtx {
        controller: create_rw_signal(controller),
    };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeCtx {
    use_context::<ThemeCtx>().expect("ThemeCtx not provided")
}

pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_default()
}
