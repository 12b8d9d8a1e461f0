//! Composer for new posts.
//!
//! Signed-out visitors get the welcome prompt instead of the form.

use dioxus::prelude::*;
use til_core::views::PostComposer;
use til_core::MAX_CONTENT_LEN;
use til_ui::{Banner, BannerKind, Button, TextArea};

use crate::components::SignInButton;
use crate::context::{use_contract, use_viewer};
use crate::platform::alert;

const POST_FAILED: &str = "Something went wrong! Maybe you need to sign out and back in? Check your browser console for more info.";

#[component]
pub fn PostForm(on_submit_success: EventHandler<()>) -> Element {
    let viewer = use_viewer();
    let contract = use_contract();
    let mut composer = use_signal(PostComposer::default);

    if viewer.is_none() {
        return rsx! {
            Banner { kind: BannerKind::Info,
                span { "Welcome, create a NEAR account, and share what you have learned today." }
                SignInButton {}
            }
        };
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(content) = composer.write().begin_submit() else {
            return;
        };
        let contract = contract.clone();
        spawn(async move {
            let result = contract.create_post(&content).await;
            let ok = composer
                .write()
                .finish_submit(&result, || on_submit_success.call(()));
            if !ok {
                alert(POST_FAILED);
            }
        });
    };

    let submitting = composer.read().is_submitting();
    let content = composer.read().content().to_string();
    let used = content.len();

    rsx! {
        form { class: "post-form", onsubmit,
            TextArea {
                value: content,
                placeholder: "What have learned today?".to_string(),
                rows: 2,
                disabled: submitting,
                oninput: move |value: String| composer.write().set_content(value),
            }
            div { class: "post-form-actions",
                span { class: "post-counter", "{used}/{MAX_CONTENT_LEN}" }
                Button {
                    button_type: "submit".to_string(),
                    loading: submitting,
                    "Send"
                }
            }
        }
    }
}
