use crate::icons::{theme_toggle_icon, IconGlyph};
use crate::state::{use_config, use_theme};
use dashboard_core::{Icon, SidebarState, NAVIGATION};
use leptos::*;
use leptos_router::{use_location, Outlet};

/// Sidebar, top bar and the outlet for the routed page.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let config = use_config();
    let theme = use_theme();
    let sidebar = create_rw_signal(SidebarState::default());
    let pathname = use_location().pathname;

    let links = NAVIGATION
        .iter()
        .copied()
        .map(|item| {
            view! {
              <a
                href=item.href
                class=move || item.link_class(&pathname.get())
                aria-current=move || item.is_active(&pathname.get()).then_some("page")
              >
                <IconGlyph icon=item.icon class="nav-icon"/>
                {item.label}
              </a>
            }
        })
        .collect_view();

    view! {
      <div class="shell">
        <aside class=move || sidebar.get().panel_class()>
          <div class="sidebar-brand">
            <h1>{config.title.clone()}</h1>
          </div>
          <nav class="sidebar-nav">{links}</nav>
        </aside>

        <div class=move || sidebar.get().content_class()>
          <header class="topbar">
            <button
              class="icon-button"
              aria-label="Toggle sidebar"
              on:click=move |_| {
                  sidebar.update(|s| {
                      s.toggle();
                  })
              }
            >
              <IconGlyph icon=Icon::Menu/>
            </button>
            <div class="topbar-user">
              <button
                class="icon-button"
                aria-label="Toggle theme"
                on:click=move |_| theme.toggle()
              >
                {move || view! { <IconGlyph icon=theme_toggle_icon(theme.theme())/> }}
              </button>
              <span class="user-name">{config.user.display_name.clone()}</span>
              <div class="avatar">{config.user.avatar_text()}</div>
            </div>
          </header>
          <main class="page">
            <Outlet/>
          </main>
        </div>
      </div>
    }
}
