//! Property-based tests for the Section Navigator.

use birthday_core::{RegionSample, Section, SectionNavigator, SimulatedViewport, VisibilitySource};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum NavOp {
    GoTo(Section),
    ScrollTo(f64),
    Settle,
    Register(Section, bool),
}

fn section_strategy() -> impl Strategy<Value = Section> {
    prop::sample::select(Section::ALL.to_vec())
}

fn op_strategy() -> impl Strategy<Value = NavOp> {
    prop_oneof![
        3 => section_strategy().prop_map(NavOp::GoTo),
        4 => (0.0..5000.0f64).prop_map(NavOp::ScrollTo),
        1 => Just(NavOp::Settle),
        1 => (section_strategy(), any::<bool>()).prop_map(|(s, some)| NavOp::Register(s, some)),
    ]
}

fn layout_strategy() -> impl Strategy<Value = Vec<(Section, f64)>> {
    prop::collection::vec(100.0..2500.0f64, 4).prop_map(|heights| {
        Section::ALL.iter().copied().zip(heights).collect()
    })
}

proptest! {
    /// The active section is always one of the four, whatever happens.
    #[test]
    fn active_is_always_a_known_section(
        layout in layout_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut nav: SectionNavigator<Section> = SectionNavigator::new();
        let mut viewport = SimulatedViewport::stacked(800.0, &layout, 0.5);
        for section in Section::ALL {
            viewport.subscribe(section).unwrap();
        }

        for op in ops {
            match op {
                NavOp::GoTo(section) => {
                    nav.go_to(section);
                }
                NavOp::ScrollTo(y) => {
                    let batch = viewport.scroll_to(y);
                    nav.observe(&batch);
                }
                NavOp::Settle => nav.settle(),
                NavOp::Register(section, some) => {
                    nav.register(section, some.then_some(section));
                }
            }
            prop_assert!(Section::ALL.contains(&nav.active()));
        }
    }

    /// A jump converges on its destination once its scroll lands there,
    /// whatever the viewport passed through on the way.
    #[test]
    fn settle_converges_to_last_jump(
        layout in layout_strategy(),
        target in section_strategy(),
        detours in prop::collection::vec(0.0..5000.0f64, 0..20),
        frames in 1usize..30,
    ) {
        let mut nav: SectionNavigator<Section> = SectionNavigator::new();
        let mut viewport = SimulatedViewport::stacked(800.0, &layout, 0.5);
        for section in Section::ALL {
            nav.register(section, Some(section));
            viewport.subscribe(section).unwrap();
        }
        nav.observe(&viewport.sample());

        let region = nav.go_to(target).unwrap();
        for y in detours {
            let batch = viewport.scroll_to(y);
            nav.observe(&batch);
        }
        let offset = viewport.offset_of(region).unwrap();
        for batch in viewport.smooth_scroll(offset, frames) {
            nav.observe(&batch);
        }
        nav.settle();
        prop_assert_eq!(nav.active(), target);
    }

    /// Once a jump is over, organic scrolling plus a settle leaves a section
    /// that is actually on screen active. Covers jumps that were settled and
    /// jumps that never moved the viewport.
    #[test]
    fn organic_scroll_settles_on_a_section_in_view(
        layout in layout_strategy(),
        target in section_strategy(),
        jump_settled in any::<bool>(),
        scrolls in prop::collection::vec((0.0..5000.0f64, 1usize..20), 1..10),
    ) {
        let mut nav: SectionNavigator<Section> = SectionNavigator::new();
        let mut viewport = SimulatedViewport::stacked(800.0, &layout, 0.5);
        for section in Section::ALL {
            nav.register(section, Some(section));
            viewport.subscribe(section).unwrap();
        }
        nav.observe(&viewport.sample());

        // Stand on the destination so the jump itself scrolls nothing
        let offset = viewport.offset_of(target).unwrap();
        let batch = viewport.scroll_to(offset);
        nav.observe(&batch);
        nav.settle();

        nav.go_to(target);
        prop_assert!(viewport.smooth_scroll(offset, 10).is_empty());
        if jump_settled {
            nav.settle();
        }

        for (y, frames) in scrolls {
            for batch in viewport.smooth_scroll(y, frames) {
                nav.observe(&batch);
            }
        }
        nav.settle();

        let active = nav.active();
        let bounds = viewport.bounds_of(active).unwrap();
        let view_top = viewport.scroll_y();
        let view_bottom = view_top + viewport.viewport_height();
        let visible = (bounds.bottom().min(view_bottom) - bounds.top.max(view_top)).max(0.0);
        let coverage = RegionSample {
            section: active,
            visible_height: visible,
            region_height: bounds.height,
            viewport_height: viewport.viewport_height(),
        }
        .coverage();
        prop_assert!(
            coverage >= 0.5,
            "{} active at y={} with coverage {}",
            active,
            view_top,
            coverage
        );
    }

    /// A `None` registration never removes a region.
    #[test]
    fn none_never_unregisters(regs in prop::collection::vec((section_strategy(), any::<bool>()), 0..40)) {
        let mut nav: SectionNavigator<u32> = SectionNavigator::new();
        let mut expected: std::collections::HashMap<Section, u32> = Default::default();

        for (i, (section, some)) in regs.into_iter().enumerate() {
            let region = some.then_some(i as u32);
            nav.register(section, region);
            if let Some(region) = region {
                expected.insert(section, region);
            }
        }

        for section in Section::ALL {
            prop_assert_eq!(nav.region(section), expected.get(&section));
        }
    }
}
