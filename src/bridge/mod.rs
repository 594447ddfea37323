//! Webview bridges.
//!
//! Browser features the page needs but Dioxus does not wrap
//! (`IntersectionObserver`, `HTMLAudioElement.play()`) are driven through
//! `document::eval` scripts that talk back over the eval channel.

pub mod audio;
pub mod visibility;
