//! Reusable UI components.

mod button;
mod icon;
mod section_heading;

pub use button::*;
pub use icon::*;
pub use section_heading::*;
