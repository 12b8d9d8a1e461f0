//! Profile page for one account: its posts and follow lists.

use dioxus::prelude::*;
use til_core::views::UserProfile;
use til_core::AccountId;
use til_ui::{Banner, BannerKind, LetterAvatar};

use crate::app::Route;
use crate::components::{FollowButton, Timeline};
use crate::context::use_services;

#[component]
pub fn User(id: ReadOnlySignal<String>) -> Element {
    let services = use_services();
    let mut profile: Signal<Option<Result<UserProfile, String>>> = use_signal(|| None);

    // Reload whenever the route points at another account
    use_effect(move || {
        let requested = id();
        profile.set(None);

        let account = match requested.parse::<AccountId>() {
            Ok(account) => account,
            Err(e) => {
                tracing::warn!(id = %requested, "Not a valid account id: {}", e);
                profile.set(Some(Err(e.to_string())));
                return;
            }
        };

        let services = services.clone();
        spawn(async move {
            let loaded =
                UserProfile::load(services.contract.as_ref(), &account, services.page()).await;
            if *id.peek() == requested {
                profile.set(Some(Ok(loaded)));
            }
        });
    });

    let name = id();
    let account = name.parse::<AccountId>().ok();

    let body = match &*profile.read() {
        None => rsx! { p { class: "timeline-empty", "Loading..." } },
        Some(Err(message)) => rsx! {
            Banner { kind: BannerKind::Error, "Unknown account: {message}" }
        },
        Some(Ok(profile)) => rsx! {
            for message in profile.errors.iter() {
                Banner { kind: BannerKind::Error, "Could not load profile: {message}" }
            }
            h2 { class: "section-title", "Posts" }
            Timeline { posts: profile.posts.clone() }
            div { class: "profile-lists",
                AccountList { title: "Following", accounts: profile.followings.clone() }
                AccountList { title: "Followers", accounts: profile.followers.clone() }
            }
        },
    };

    rsx! {
        div { class: "profile-header",
            LetterAvatar { name: name.clone(), size: 60 }
            h1 { class: "profile-name", "{name}" }
            if let Some(account) = account {
                FollowButton { user: account }
            }
        }
        {body}
    }
}

#[component]
fn AccountList(title: &'static str, accounts: Vec<AccountId>) -> Element {
    rsx! {
        section { class: "profile-list",
            h2 { "{title}" }
            if accounts.is_empty() {
                p { class: "post-age", "None yet" }
            }
            ul {
                for account in accounts {
                    li { key: "{account}",
                        Link { to: Route::User { id: account.to_string() }, "{account}" }
                    }
                }
            }
        }
    }
}
