//! Top bar: brand link plus the session control.

use dioxus::prelude::*;
use til_ui::{Button, ButtonVariant, LetterAvatar};

use crate::app::Route;
use crate::context::{use_session, use_session_epoch, use_viewer};
use crate::platform::alert;

#[component]
pub fn HeadBar() -> Element {
    let viewer = use_viewer();
    let session = use_session();
    let mut epoch = use_session_epoch();

    let sign_out = move |_: ()| {
        match session.sign_out() {
            Ok(()) => epoch.bump(),
            Err(e) => {
                tracing::error!("Sign out failed: {}", e);
                alert("Something went wrong!");
            }
        }
    };

    let account_area = match viewer {
        Some(account) => rsx! {
            div { class: "head-account",
                LetterAvatar { name: account.to_string(), size: 32 }
                span { "{account}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: sign_out,
                    "Sign out"
                }
            }
        },
        None => rsx! { SignInButton {} },
    };

    rsx! {
        header { class: "head-bar",
            Link { class: "brand", to: Route::Home {}, "TIL" }
            {account_area}
        }
    }
}

/// Starts the wallet login, or signs in the local identity
#[component]
pub fn SignInButton() -> Element {
    let session = use_session();
    let mut epoch = use_session_epoch();

    let sign_in = move |_: ()| {
        match session.sign_in() {
            Ok(()) => epoch.bump(),
            Err(e) => {
                tracing::error!("Sign in failed: {}", e);
                alert("Something went wrong!");
            }
        }
    };

    rsx! {
        Button { onclick: sign_in, "Sign in" }
    }
}
