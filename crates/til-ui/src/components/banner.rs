//! Inline notice banners

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BannerKind {
    /// Neutral call to action, e.g. the sign-in prompt
    #[default]
    Info,
    /// A read failed; the view below may be stale
    Error,
}

impl BannerKind {
    pub fn class(&self) -> &'static str {
        match self {
            BannerKind::Info => "banner banner-info",
            BannerKind::Error => "banner banner-error",
        }
    }

    fn role(&self) -> &'static str {
        match self {
            BannerKind::Info => "status",
            BannerKind::Error => "alert",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BannerProps {
    #[props(default)]
    pub kind: BannerKind,
    pub children: Element,
}

#[component]
pub fn Banner(props: BannerProps) -> Element {
    rsx! {
        div {
            class: props.kind.class(),
            role: props.kind.role(),
            {props.children}
        }
    }
}
