//! Post list shared by the home tabs and the profile page.

use dioxus::prelude::*;
use til_core::time::{now_millis, post_age};
use til_core::Post;
use til_ui::LetterAvatar;

use crate::app::Route;

#[component]
pub fn Timeline(posts: Vec<Post>) -> Element {
    if posts.is_empty() {
        return rsx! {
            p { class: "timeline-empty", "Nothing here yet." }
        };
    }

    let now = now_millis();

    rsx! {
        div { class: "timeline",
            for post in posts {
                PostCard { key: "{post.id}", post, now }
            }
        }
    }
}

#[component]
fn PostCard(post: Post, now: i64) -> Element {
    let author = post.user.to_string();
    let age = post_age(post.created_at, now);

    rsx! {
        article { class: "post-card",
            LetterAvatar { name: author.clone() }
            div { class: "post-body",
                div { class: "post-meta",
                    Link {
                        class: "post-author",
                        to: Route::User { id: author.clone() },
                        "{author}"
                    }
                    span { class: "post-age", "{age}" }
                }
                p { class: "post-content", "{post.content}" }
            }
        }
    }
}
