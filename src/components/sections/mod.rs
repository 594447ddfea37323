//! Page content, top to bottom.

mod gallery;
mod hero;
mod message;
mod special_date;
mod wishes;

pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use message::MessageSection;
pub use special_date::SpecialDateSection;
pub use wishes::WishesSection;
