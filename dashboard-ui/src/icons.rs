use dashboard_core::{Icon, Theme};
use leptos::*;

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
      <svg
        class=format!("icon {class}")
        data-icon=icon.name()
        xmlns="http://www.w3.org/2000/svg"
        viewBox="0 0 24 24"
        fill="none"
        stroke="currentColor"
        stroke-width="2"
        stroke-linecap="round"
        stroke-linejoin="round"
        aria-hidden="true"
      >
        {icon.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
      </svg>
    }
}

/// Glyph on the theme button: the mode a click switches to.
pub fn theme_toggle_icon(theme: Theme) -> Icon {
    match theme {
        Theme::Dark => Icon::Sun,
        Theme::Light => Icon::Moon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_icon_shows_target_mode() {
        assert_eq!(theme_toggle_icon(Theme::Dark), Icon::Sun);
        assert_eq!(theme_toggle_icon(Theme::Light), Icon::Moon);
    }
}
