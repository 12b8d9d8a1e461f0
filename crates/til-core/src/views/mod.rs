//! UI-independent view state.
//!
//! Each component in the app drives one of these. They never touch the
//! contract on their own except through the explicit async helpers, which
//! makes every transition testable without a renderer.

pub mod composer;
pub mod follow;
pub mod profile;
pub mod timeline;

pub use composer::PostComposer;
pub use follow::{FollowAction, FollowControl, FollowState};
pub use profile::UserProfile;
pub use timeline::{fetch_timeline, HomeTimelines, TimelineFetch, TimelineTab};
