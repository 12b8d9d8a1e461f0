//! Letter avatar: a colored circle with the name's first letter

use dioxus::prelude::*;
use til_core::avatar::LetterAvatar as Avatar;

/// Default avatar diameter in pixels
pub const DEFAULT_AVATAR_SIZE: u32 = 40;

/// Inline style for an avatar of `size` pixels
pub fn avatar_style(avatar: &Avatar, size: u32) -> String {
    format!(
        "background-color: {}; width: {size}px; height: {size}px; line-height: {size}px; font-size: {}px;",
        avatar.color,
        size / 2
    )
}

#[derive(Clone, PartialEq, Props)]
pub struct LetterAvatarProps {
    /// Account name the color and letter are derived from
    pub name: String,
    #[props(default = DEFAULT_AVATAR_SIZE)]
    pub size: u32,
}

#[component]
pub fn LetterAvatar(props: LetterAvatarProps) -> Element {
    let avatar = Avatar::for_name(&props.name);
    let style = avatar_style(&avatar, props.size);

    rsx! {
        div {
            class: "letter-avatar",
            style: "{style}",
            title: "{props.name}",
            "{avatar.initial}"
        }
    }
}
