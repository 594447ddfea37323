//! Page components for the birthday page.

mod birthday;

pub use birthday::BirthdayPage;
