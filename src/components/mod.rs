//! Page components.
//!
//! Stateful pieces of the birthday page. Presentational building blocks
//! (buttons, icons, headings) live in `birthday-ui`.

mod audio_toggle;
mod confetti;
mod image_modal;
mod mobile_nav;
mod nav_header;
mod page_section;
pub mod sections;

pub use audio_toggle::AudioToggle;
pub use confetti::CelebrationOverlay;
pub use image_modal::ImageModal;
pub use mobile_nav::MobileMenu;
pub use nav_header::NavHeader;
pub use page_section::PageSection;
