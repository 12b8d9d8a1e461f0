use dioxus::prelude::*;
use til_core::Config;

use crate::components::HeadBar;
use crate::context::{AppServices, SessionEpoch};
use crate::pages::{Home, User};
use crate::platform::build_services;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Post form and the World/Me timelines
/// - `/users/:id` - Profile of one account
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/users/:id")]
        User { id: String },
}

/// Root application component.
///
/// Provides global styles, backend services, and routing.
#[component]
pub fn App() -> Element {
    let services = use_hook(|| match Config::from_build_env() {
        Ok(config) => Ok(build_services(config)),
        Err(e) => {
            tracing::error!("Invalid build configuration: {}", e);
            Err(e.to_string())
        }
    });

    let body = match services {
        Ok(services) => rsx! { ServiceRoot { services } },
        Err(message) => rsx! {
            main { class: "container",
                h1 { class: "brand", "TIL" }
                p { class: "fatal", "{message}" }
            }
        },
    };

    rsx! {
        document::Title { "TIL" }
        style { {GLOBAL_STYLES} }
        {body}
    }
}

/// Provides services to the routed tree
#[component]
fn ServiceRoot(services: AppServices) -> Element {
    use_context_provider(|| services.clone());
    let epoch = use_signal(|| 0u64);
    use_context_provider(|| SessionEpoch(epoch));

    rsx! {
        Router::<Route> {}
    }
}

/// Chrome shared by every page
#[component]
fn Shell() -> Element {
    rsx! {
        HeadBar {}
        main { class: "container",
            Outlet::<Route> {}
        }
    }
}
