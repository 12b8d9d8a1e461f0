//! "World" / "Me" tabs on the home page.
//!
//! Each tab keeps its own cached posts. The `reload` token is bumped by the
//! post form; every change re-reads whichever tab is active.

use dioxus::prelude::*;
use til_core::views::{fetch_timeline, HomeTimelines, TimelineTab};
use til_ui::{Banner, BannerKind, TabBar};

use crate::components::Timeline;
use crate::context::{use_services, AppServices};

async fn load_tab(services: AppServices, mut timelines: Signal<HomeTimelines>, tab: TimelineTab) {
    let fetch = fetch_timeline(
        services.contract.as_ref(),
        services.session.as_ref(),
        tab,
        services.page(),
    )
    .await;
    timelines.write().apply(tab, fetch);
}

#[component]
pub fn HomeTab(reload: ReadOnlySignal<u64>) -> Element {
    let services = use_services();
    let mut timelines = use_signal(HomeTimelines::default);

    // Runs on mount (active tab is "World") and again on every reload token
    let reload_services = services.clone();
    use_effect(move || {
        let token = reload();
        let tab = timelines.peek().active();
        tracing::debug!(token, %tab, "loading timeline");
        spawn(load_tab(reload_services.clone(), timelines, tab));
    });

    let onselect = move |index: usize| {
        let Some(&tab) = TimelineTab::ALL.get(index) else {
            return;
        };
        timelines.write().select(tab);
        spawn(load_tab(services.clone(), timelines, tab));
    };

    let labels: Vec<String> = TimelineTab::ALL
        .iter()
        .map(|tab| tab.label().to_string())
        .collect();

    let state = timelines.read();
    let active = TimelineTab::ALL
        .iter()
        .position(|tab| *tab == state.active())
        .unwrap_or(0);
    let error = state.error().map(str::to_string);
    let posts = state.active_posts().to_vec();
    drop(state);

    rsx! {
        TabBar { labels, active, onselect }
        if let Some(message) = error {
            Banner { kind: BannerKind::Error, "Could not load posts: {message}" }
        }
        Timeline { posts }
    }
}
