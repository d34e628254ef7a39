use crate::icons::IconGlyph;
use crate::state::use_config;
use dashboard_core::stats::{ACTIVITY_TITLE, EMPTY_ACTIVITY_MESSAGE};
use dashboard_core::{StatMetric, STATS};
use leptos::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_config();

    view! {
      <div class="landing">
        <div>
          <h1 class="page-title">{config.greeting()}</h1>
          <p class="muted">"Here's what's happening today."</p>
        </div>
        <div class="stat-grid">
          {STATS.iter().copied().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
        </div>
        <ActivityPanel/>
      </div>
    }
}

#[component]
fn StatCard(stat: StatMetric) -> impl IntoView {
    view! {
      <section class="card">
        <div class="card-header stat-header">
          <h3 class="card-title muted">{stat.title}</h3>
          <IconGlyph icon=stat.icon class="muted"/>
        </div>
        <div class="card-body">
          <div class="stat-value">{stat.value}</div>
          <p class="stat-trend">{stat.trend}</p>
        </div>
      </section>
    }
}

#[component]
fn ActivityPanel() -> impl IntoView {
    view! {
      <section class="card">
        <div class="card-header">
          <h3 class="card-title">{ACTIVITY_TITLE}</h3>
        </div>
        <div class="card-body">
          <p class="muted">{EMPTY_ACTIVITY_MESSAGE}</p>
        </div>
      </section>
    }
}

/// Target of the Profile and Settings links; no content yet.
#[component]
pub fn PlaceholderPage(title: &'static str) -> impl IntoView {
    view! {
      <div class="landing">
        <h1 class="page-title">{title}</h1>
        <section class="card">
          <div class="card-body">
            <p class="muted">"Nothing to configure here yet."</p>
          </div>
        </section>
      </div>
    }
}
