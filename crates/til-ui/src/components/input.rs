//! Text input components

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 3)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut content = use_signal(String::new);
///
/// rsx! {
///     TextArea {
///         value: content(),
///         oninput: move |s| content.set(s),
///         placeholder: "What have learned today?".to_string(),
///     }
/// }
/// ```
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    // stable for the lifetime of the component
    let generated = use_hook(|| format!("textarea-{}", next_id()));
    let id = props.id.clone().unwrap_or(generated);

    rsx! {
        textarea {
            id: "{id}",
            class: "input-field textarea",
            rows: "{props.rows}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            disabled: props.disabled,
            value: "{props.value}",
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

/// Process-unique id for form elements
fn next_id() -> u32 {
    static NEXT: AtomicU32 = AtomicU32::new(0);
    NEXT.fetch_add(1, Ordering::Relaxed)
}
