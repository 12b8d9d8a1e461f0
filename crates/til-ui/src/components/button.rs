//! Button Components
//!
//! - Primary: filled accent, used for "Post" and "Sign in"
//! - Outline: accent border, used by the follow control
//! - Ghost: text-only, used for "Sign out"

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Class list for a button in the given state
pub fn button_class(variant: ButtonVariant, loading: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if loading {
        class.push_str(" btn-loading");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Shows a spinner and blocks clicks while an action is in flight
    #[props(default = false)]
    pub loading: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         loading: composer.read().is_submitting(),
///         button_type: "submit".to_string(),
///         "Post"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.loading, props.class.as_deref());
    let blocked = props.disabled || props.loading;

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            disabled: blocked,
            "aria-busy": props.loading,
            onclick: move |_| {
                if blocked {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.loading {
                span { class: "spinner", "aria-hidden": "true" }
            }
            {props.children}
        }
    }
}
