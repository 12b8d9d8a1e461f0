//! Follow / Following toggle on a profile.

use dioxus::prelude::*;
use til_core::views::{FollowControl, FollowState};
use til_core::AccountId;
use til_ui::{Button, ButtonVariant};

use crate::context::{use_contract, use_session, use_session_epoch};
use crate::platform::alert;

#[component]
pub fn FollowButton(user: ReadOnlySignal<AccountId>) -> Element {
    let contract = use_contract();
    let session = use_session();
    let epoch = use_session_epoch();
    let mut control = use_signal(|| FollowControl::new(user.peek().clone(), session.account_id()));

    // A new subject or a session change starts over with one fresh check
    let check_contract = contract.clone();
    use_effect(move || {
        let subject = user();
        let _ = epoch.0.read();
        let viewer = session.account_id();

        let stale = {
            let current = control.peek();
            current.subject() != &subject || current.viewer() != viewer.as_ref()
        };
        if stale {
            control.set(FollowControl::new(subject, viewer));
        }

        let Some((follower, followee)) = control.write().begin_check() else {
            return;
        };
        let contract = check_contract.clone();
        spawn(async move {
            let result = contract.is_follow(&follower, &followee).await;
            if control.peek().subject() == &followee {
                control.write().finish_check(result);
            }
        });
    });

    let onclick = move |_: ()| {
        let action = match control.write().begin_toggle() {
            Ok(Some(action)) => action,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("Follow refused: {}", e);
                alert("Something went wrong!");
                return;
            }
        };
        let subject = control.peek().subject().clone();
        let contract = contract.clone();
        spawn(async move {
            let result = action.perform(contract.as_ref(), &subject).await;
            if control.peek().subject() != &subject {
                return;
            }
            control.write().finish_toggle(action, &result);
            if result.is_err() {
                alert("Something went wrong!");
            }
        });
    };

    let state = control.read().state();
    let pending = control.read().is_pending();
    let Some(label) = state.label() else {
        return rsx! {};
    };
    let variant = match state {
        FollowState::Following => ButtonVariant::Primary,
        _ => ButtonVariant::Outline,
    };

    rsx! {
        Button { variant, loading: pending, onclick, "{label}" }
    }
}
