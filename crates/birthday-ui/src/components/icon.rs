//! Lucide icons used across the page.

use birthday_core::WishIcon;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Heart,
    Gift,
    Camera,
    Music,
    Calendar,
    MessageCircle,
    Star,
    Sparkles,
    ChevronDown,
    Play,
    Pause,
    Menu,
    X,
}

impl From<WishIcon> for IconKind {
    fn from(icon: WishIcon) -> Self {
        match icon {
            WishIcon::Heart => IconKind::Heart,
            WishIcon::Gift => IconKind::Gift,
            WishIcon::Music => IconKind::Music,
            WishIcon::Calendar => IconKind::Calendar,
            WishIcon::Star => IconKind::Star,
        }
    }
}

/// Stroke icon sized in pixels, colored by `currentColor`.
#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default = 24)] size: u32,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = class.unwrap_or_default();

    rsx! {
        svg {
            class: "icon {class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {icon_body(kind)}
        }
    }
}

fn icon_body(kind: IconKind) -> Element {
    match kind {
        IconKind::Heart => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
        IconKind::Gift => rsx! {
            rect { x: "3", y: "8", width: "18", height: "4", rx: "1" }
            path { d: "M12 8v13" }
            path { d: "M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7" }
            path { d: "M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5" }
        },
        IconKind::Camera => rsx! {
            path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
            circle { cx: "12", cy: "13", r: "3" }
        },
        IconKind::Music => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
        IconKind::Calendar => rsx! {
            path { d: "M8 2v4" }
            path { d: "M16 2v4" }
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            path { d: "M3 10h18" }
        },
        IconKind::MessageCircle => rsx! {
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        },
        IconKind::Star => rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
        IconKind::Sparkles => rsx! {
            path { d: "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" }
            path { d: "M5 3v4" }
            path { d: "M19 17v4" }
            path { d: "M3 5h4" }
            path { d: "M17 19h4" }
        },
        IconKind::ChevronDown => rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
        IconKind::Play => rsx! {
            polygon { points: "6 3 20 12 6 21 6 3" }
        },
        IconKind::Pause => rsx! {
            rect { x: "14", y: "4", width: "4", height: "16", rx: "1" }
            rect { x: "6", y: "4", width: "4", height: "16", rx: "1" }
        },
        IconKind::Menu => rsx! {
            path { d: "M4 6H20M4 12H20M4 18H20" }
        },
        IconKind::X => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wish_icons_map_to_glyphs() {
        assert_eq!(IconKind::from(WishIcon::Heart), IconKind::Heart);
        assert_eq!(IconKind::from(WishIcon::Calendar), IconKind::Calendar);
    }
}
