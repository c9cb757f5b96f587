//! Property-based tests for the day-column layout using proptest.
//!
//! These check the placement invariants that must hold for *any* set of
//! intervals, not just the calendar matrix in `layout_tests.rs`. Render order
//! is an internal scheduling detail, so it is not asserted here.

mod common;

use chrono::Duration;
use common::{d, test_accessors, MinuteGrid, TestEvent};
use day_layout::{get_styled_events, LayoutOptions};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// An event on the fixture day: start in 06:00..20:00 on a 5 minute raster,
/// duration 5..240 minutes.
fn arb_event() -> impl Strategy<Value = TestEvent> {
    (0i64..168, 1i64..=48).prop_map(|(slot, len)| {
        let start = d(6, 0) + Duration::minutes(slot * 5);
        TestEvent {
            id: "e",
            start,
            end: start + Duration::minutes(len * 5),
        }
    })
}

fn arb_events() -> impl Strategy<Value = Vec<TestEvent>> {
    prop::collection::vec(arb_event(), 0..24)
}

fn arb_options() -> impl Strategy<Value = LayoutOptions> {
    (0i64..=60).prop_map(|minutes| LayoutOptions::new(Duration::minutes(minutes)).unwrap())
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: every event stays inside the column with a positive width
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn widths_are_positive_and_fit_the_column(
        events in arb_events(),
        options in arb_options(),
    ) {
        let styled = get_styled_events(&events, &test_accessors(), &MinuteGrid::day(), &options).unwrap();

        for out in &styled {
            prop_assert!(out.style.width > 0.0, "non-positive width: {:?}", out.style);
            prop_assert!(out.style.x_offset >= 0.0, "negative offset: {:?}", out.style);
            prop_assert!(
                out.style.x_offset + out.style.width <= 100.0 + EPSILON,
                "event overruns the column: {:?}",
                out.style
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: one output per input, each borrowing a distinct input record
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn output_is_a_permutation_of_the_input(
        events in arb_events(),
        options in arb_options(),
    ) {
        let styled = get_styled_events(&events, &test_accessors(), &MinuteGrid::day(), &options).unwrap();

        prop_assert_eq!(styled.len(), events.len());
        let mut seen = vec![false; events.len()];
        for out in &styled {
            let index = events
                .iter()
                .position(|input| std::ptr::eq(input, out.event));
            prop_assert!(index.is_some(), "output does not borrow an input record");
            let index = index.unwrap();
            prop_assert!(!seen[index], "input record emitted twice");
            seen[index] = true;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: identical inputs give identical outputs
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn layout_is_deterministic(
        events in arb_events(),
        options in arb_options(),
    ) {
        let grid = MinuteGrid::day();
        let first = get_styled_events(&events, &test_accessors(), &grid, &options).unwrap();
        let second = get_styled_events(&events, &test_accessors(), &grid, &options).unwrap();

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert!(std::ptr::eq(a.event, b.event));
            prop_assert_eq!(a.style, b.style);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: an event far from every other one takes the full column
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn isolated_event_takes_full_width(
        events in arb_events(),
        options in arb_options(),
    ) {
        // Generated events start by 19:55, more than the largest threshold
        // before 22:00. Dropping those that run past 21:00 leaves nothing that
        // intersects the extra event.
        let mut events: Vec<TestEvent> = events
            .into_iter()
            .filter(|e| e.end <= d(21, 0))
            .collect();
        events.push(TestEvent { id: "isolated", start: d(22, 0), end: d(23, 0) });

        let styled = get_styled_events(&events, &test_accessors(), &MinuteGrid::day(), &options).unwrap();
        let isolated = styled.iter().find(|s| s.event.id == "isolated").unwrap();

        prop_assert_eq!(isolated.style.width, 100.0);
        prop_assert_eq!(isolated.style.x_offset, 0.0);
    }
}

// ---------------------------------------------------------------------------
// Property 5: N identical events split the column into equal bands
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn identical_events_split_evenly(n in 1usize..=8, options in arb_options()) {
        let events: Vec<TestEvent> = (0..n)
            .map(|_| TestEvent { id: "same", start: d(9, 0), end: d(10, 0) })
            .collect();

        let styled = get_styled_events(&events, &test_accessors(), &MinuteGrid::day(), &options).unwrap();
        let band = 100.0 / n as f64;

        for (i, out) in styled.iter().enumerate() {
            prop_assert!((out.style.width - band).abs() < 1e-6, "width {:?} != {}", out.style, band);
            prop_assert!(
                (out.style.x_offset - band * i as f64).abs() < 1e-6,
                "offset {:?} != {}",
                out.style,
                band * i as f64
            );
        }
    }
}
