//! Routed pages for TIL.

mod home;
mod user;

pub use home::Home;
pub use user::User;
