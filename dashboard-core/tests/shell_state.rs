use dashboard_core::nav::active_item;
use dashboard_core::{
    MemoryStore, PreferenceStore, SidebarState, StoreError, Theme, ThemeController, NAVIGATION,
    STATS, THEME_STORAGE_KEY,
};

/// Store whose reads and writes always fail.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("disabled".into()))
    }

    fn save(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            key: key.into(),
            reason: "quota exceeded".into(),
        })
    }
}

#[test]
fn even_sidebar_toggles_restore_initial_state() {
    for len in (0..10).step_by(2) {
        let mut state = SidebarState::default();
        for _ in 0..len {
            state.toggle();
        }
        assert_eq!(state, SidebarState::default(), "after {len} toggles");
    }
}

#[test]
fn store_tracks_theme_after_every_toggle() {
    for initial in [None, Some("light"), Some("dark")] {
        let store = match initial {
            Some(value) => MemoryStore::with_entry(THEME_STORAGE_KEY, value),
            None => MemoryStore::new(),
        };
        let mut controller = ThemeController::load(store, THEME_STORAGE_KEY, None);
        let start = controller.theme();

        for step in 1..=6 {
            let now = controller.toggle();
            assert_eq!(
                controller.store().get(THEME_STORAGE_KEY),
                Some(now.as_str()),
                "diverged at step {step}"
            );
            if step % 2 == 0 {
                assert_eq!(now, start);
            } else {
                assert_eq!(now, start.toggled());
            }
        }
    }
}

#[test]
fn persisted_dark_wins_over_any_hint() {
    for hint in [None, Some(false), Some(true)] {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "dark");
        let controller = ThemeController::load(store, THEME_STORAGE_KEY, hint);
        assert_eq!(controller.theme(), Theme::Dark, "hint {hint:?}");
    }
}

#[test]
fn persisted_light_wins_over_dark_hint() {
    let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "light");
    let controller = ThemeController::load(store, THEME_STORAGE_KEY, Some(true));
    assert_eq!(controller.theme(), Theme::Light);
}

#[test]
fn dark_hint_used_when_nothing_persisted() {
    let controller = ThemeController::load(MemoryStore::new(), THEME_STORAGE_KEY, Some(true));
    assert_eq!(controller.theme(), Theme::Dark);
}

#[test]
fn light_when_nothing_persisted_and_no_hint() {
    let controller = ThemeController::load(MemoryStore::new(), THEME_STORAGE_KEY, None);
    assert_eq!(controller.theme(), Theme::Light);
}

#[test]
fn garbage_in_storage_behaves_as_absent() {
    let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "purple");
    let controller = ThemeController::load(store, THEME_STORAGE_KEY, Some(true));
    assert_eq!(controller.theme(), Theme::Dark);
}

#[test]
fn unreadable_store_falls_back_and_toggle_still_flips() {
    let mut controller = ThemeController::load(BrokenStore, THEME_STORAGE_KEY, Some(true));
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(controller.theme(), Theme::Light);
}

#[test]
fn each_target_path_activates_exactly_its_item() {
    for item in &NAVIGATION {
        let active: Vec<_> = NAVIGATION
            .iter()
            .filter(|other| other.is_active(item.href))
            .collect();
        assert_eq!(active, vec![item]);
    }
}

#[test]
fn strict_sub_path_activates_nothing() {
    assert_eq!(active_item(&NAVIGATION, "/dashboard/profile/edit"), None);
    assert_eq!(active_item(&NAVIGATION, "/dashboard/settings/billing"), None);
}

#[test]
fn landing_metrics_are_listed_in_order() {
    let rendered: Vec<_> = STATS.iter().map(|s| (s.title, s.value)).collect();
    assert_eq!(
        rendered,
        vec![
            ("Total Users", "1,234"),
            ("Active Now", "321"),
            ("Revenue", "$12,345"),
        ]
    );
}
