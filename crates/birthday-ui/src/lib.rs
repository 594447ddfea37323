//! Birthday Page UI Components
//!
//! Presentational Dioxus components shared by the page: buttons, Lucide
//! icons and section headings. They hold no page state; everything arrives
//! through props and event handlers.
//!
//! ## Palette
//!
//! - **Pink (#ec4899)**: highlights, active navigation, primary actions
//! - **Purple (#a855f7)**: headings, icons
//! - **Blue (#3b82f6)**: gradient tails
//! - **Blush to sky**: page background gradient

pub mod components;

pub use components::*;
