use crate::layout::DashboardLayout;
use crate::pages::{LandingPage, PlaceholderPage};
use crate::state::provide_theme_context;
use crate::style::GLOBAL_CSS;
use dashboard_core::DashboardConfig;
use leptos::*;
use leptos_router::{Redirect, Route, Router, Routes};

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let theme = provide_theme_context(&config);
    provide_context(config);

    view! {
      <style>{GLOBAL_CSS}</style>
      <div class=move || format!("app {}", theme.theme().css_class())>
        <Router>
          <Routes>
            <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
            <Route path="/dashboard" view=DashboardLayout>
              <Route path="" view=LandingPage/>
              <Route path="profile" view=|| view! { <PlaceholderPage title="Profile"/> }/>
              <Route path="settings" view=|| view! { <PlaceholderPage title="Settings"/> }/>
            </Route>
          </Routes>
        </Router>
      </div>
    }
}
