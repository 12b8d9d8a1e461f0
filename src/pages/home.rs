//! Home page: post form above the World/Me timelines.

use dioxus::prelude::*;

use crate::components::{HomeTab, PostForm};

#[component]
pub fn Home() -> Element {
    let mut reload = use_signal(|| 0u64);

    rsx! {
        PostForm { on_submit_success: move |_| reload.with_mut(|token| *token += 1) }
        HomeTab { reload }
    }
}
