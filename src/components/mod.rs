//! App components for TIL.
//!
//! These read services from context; the purely presentational pieces live
//! in `til-ui`.

mod follow_button;
mod head_bar;
mod home_tab;
mod post_form;
mod timeline;

pub use follow_button::FollowButton;
pub use head_bar::{HeadBar, SignInButton};
pub use home_tab::HomeTab;
pub use post_form::PostForm;
pub use timeline::Timeline;
