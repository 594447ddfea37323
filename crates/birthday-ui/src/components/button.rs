//! Button Components
//!
//! - Glow: gradient pill for the page's calls to action
//! - Ghost: transparent text button (navigation entries)
//! - Floating: round glass button pinned to a corner

use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Pink-to-purple gradient pill with hover glow
    #[default]
    Glow,
    /// Text-only button
    Ghost,
    /// Round frosted-glass button
    Floating,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Glow => "btn-glow",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Floating => "btn-floating",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Styled button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Glow,
///         onclick: move |_| go_to(Section::Gallery),
///         "Explore Your Surprise Now"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());
    let label = props.aria_label.clone().unwrap_or_default();

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": if label.is_empty() { None } else { Some(label) },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |evt: MouseEvent| {
                // Keep the click from reaching a backdrop behind the button
                evt.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>, #[props(default)] class: Option<String>) -> Element {
    let full_class = join_classes("close-btn", class.as_deref());

    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: full_class,
            Icon { kind: IconKind::X, size: 24 }
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
