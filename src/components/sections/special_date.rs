//! Birth date card with a month calendar.
//!
//! Sits between the greeting and the gallery but is not a navigation
//! target of its own.

use birthday_core::calendar::WEEKDAY_HEADERS;
use birthday_core::MonthGrid;
use birthday_ui::{HeadingTone, Icon, IconKind, SectionHeading};
use chrono::Local;
use dioxus::prelude::*;

use crate::context::use_page_config;

#[component]
pub fn SpecialDateSection() -> Element {
    let config = use_page_config();
    let heading = config.content.headings.special_date.clone();
    let date = &config.content.special_date;

    let years = date.years_since(Local::now().date_naive());
    let years_label = match years {
        1 => "1 year ago".to_string(),
        n => format!("{n} years ago"),
    };
    let long_date = date.long_date();
    let weekday = date.weekday_name();
    let month_title = date.month_title();
    let grid = date.grid();

    rsx! {
        section { class: "special-date",
            div { class: "container",
                SectionHeading {
                    icon: IconKind::Calendar,
                    title: heading.title,
                    subtitle: heading.subtitle,
                    tone: HeadingTone::Lilac,
                }
                div { class: "card-frame",
                    div { class: "card special-date__card",
                        div { class: "special-date__facts",
                            h3 { "{long_date}" }
                            p { class: "muted", "{date.caption}" }
                            ul { class: "fact-list",
                                li { span { class: "dot dot-pink" } "A {weekday}" }
                                li { span { class: "dot dot-purple" } "{years_label}" }
                                li { span { class: "dot dot-blue" } "{date.note}" }
                            }
                        }
                        div { class: "calendar",
                            h4 { class: "calendar__title", "{month_title}" }
                            div { class: "calendar__grid calendar__header",
                                for day in WEEKDAY_HEADERS {
                                    div { key: "{day}", "{day}" }
                                }
                            }
                            div { class: "calendar__grid",
                                for (week_index, week) in grid.weeks.iter().enumerate() {
                                    for (slot, day) in week.iter().enumerate() {
                                        {render_day(&grid, week_index * 7 + slot, *day)}
                                    }
                                }
                            }
                            div { class: "calendar__sparkle",
                                Icon { kind: IconKind::Sparkles, size: 40 }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_day(grid: &MonthGrid, key: usize, day: Option<u32>) -> Element {
    match day {
        None => rsx! { div { key: "{key}", class: "calendar__day empty" } },
        Some(day) if grid.is_highlight(day) => rsx! {
            div { key: "{key}", class: "calendar__day highlight", "{day}" }
        },
        Some(day) => rsx! { div { key: "{key}", class: "calendar__day", "{day}" } },
    }
}
