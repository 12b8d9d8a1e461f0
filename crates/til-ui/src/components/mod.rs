//! Reusable UI components

mod banner;
mod button;
mod input;
mod letter_avatar;
mod tabs;

pub use banner::*;
pub use button::*;
pub use input::*;
pub use letter_avatar::*;
pub use tabs::*;
