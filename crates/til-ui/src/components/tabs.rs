//! Tab strip

use dioxus::prelude::*;

pub fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TabBarProps {
    /// Tab labels, left to right
    pub labels: Vec<String>,
    /// Index of the selected tab
    pub active: usize,
    /// Called with the index of a clicked tab
    pub onselect: EventHandler<usize>,
}

#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let onselect = props.onselect;

    rsx! {
        nav { class: "tab-bar", role: "tablist",
            for (index, label) in props.labels.iter().enumerate() {
                button {
                    key: "{label}",
                    class: tab_class(index == props.active),
                    role: "tab",
                    "aria-selected": index == props.active,
                    onclick: move |_| onselect.call(index),
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tab_class() {
        assert_eq!(tab_class(true), "tab tab-active");
        assert_eq!(tab_class(false), "tab");
    }
}
