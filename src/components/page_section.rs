//! Navigable section wrapper.

use birthday_core::Section;
use dioxus::prelude::*;

use crate::bridge::visibility::VisibilityCommand;
use crate::context::use_page_state;

/// A `<section>` the navigator knows about.
///
/// On mount the element is registered as the section's scroll region and
/// handed to the visibility observer.
#[component]
pub fn PageSection(
    section: Section,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let mut state = use_page_state();
    let observer = use_coroutine_handle::<VisibilityCommand>();
    let class = match class {
        Some(extra) => format!("page-section {extra}"),
        None => "page-section".to_string(),
    };

    rsx! {
        section {
            id: "{section.as_str()}",
            class: "{class}",
            "data-section": section.as_str(),
            onmounted: move |evt: MountedEvent| {
                state.write().navigator.register(section, Some(evt.data()));
                observer.send(VisibilityCommand::Observe(section));
                tracing::debug!(%section, "Section mounted");
            },
            {children}
        }
    }
}
