//! Step definitions for counting
//!
//! Taps on buttons and regions, and checks on the value, display and cues.

use crate::common::world::CounterWorld;
use cucumber::{given, then, when};
use tapcounter::app::geometry::Button;
use tapcounter::{DisplayMode, FeedbackKind};

fn button(label: &str) -> Button {
    Button::ALL
        .into_iter()
        .find(|button| button.label() == label)
        .unwrap_or_else(|| panic!("no button labelled {label:?}"))
}

fn feedback_kind(name: &str) -> FeedbackKind {
    match name {
        "increment" => FeedbackKind::Increment,
        "decrement" => FeedbackKind::Decrement,
        other => panic!("unknown cue {other:?}"),
    }
}

#[given(regex = r"^the counter is at (-?\d+)$")]
async fn given_counter_at(world: &mut CounterWorld, value: i64) {
    world.set_value(value);
    assert_eq!(world.value(), value);
}

#[when(regex = r#"^I tap the "([A-Za-z]+)" button$"#)]
async fn when_tap_button(world: &mut CounterWorld, label: String) {
    world.click_button(button(&label));
}

#[when("I tap the screen")]
async fn when_tap_screen(world: &mut CounterWorld) {
    world.tap_left_half();
}

#[when(regex = r"^I tap the screen (\d+) times$")]
async fn when_tap_screen_times(world: &mut CounterWorld, times: usize) {
    for _ in 0..times {
        world.tap_left_half();
    }
}

#[when("I tap the left half")]
async fn when_tap_left_half(world: &mut CounterWorld) {
    world.tap_left_half();
}

#[when("I tap the right half")]
async fn when_tap_right_half(world: &mut CounterWorld) {
    world.tap_right_half();
}

#[when(regex = r"^I click at column (\d+), row (\d+)$")]
async fn when_click_at(world: &mut CounterWorld, column: u16, row: u16) {
    world.click(column, row);
}

#[then(regex = r"^the counter should be (-?\d+)$")]
async fn then_counter_is(world: &mut CounterWorld, value: i64) {
    assert_eq!(world.value(), value);
}

#[then(regex = r#"^the display should read "([^"]+)"$"#)]
async fn then_display_reads(world: &mut CounterWorld, text: String) {
    assert_eq!(world.display(), text);
}

#[then(regex = r"^(\d+) (increment|decrement) cues? should have played$")]
async fn then_cues_played(world: &mut CounterWorld, count: usize, kind: String) {
    assert_eq!(world.cues(feedback_kind(&kind)), count);
}

#[then("no cue should have played")]
async fn then_no_cue(world: &mut CounterWorld) {
    assert!(
        world.feedback.played().is_empty(),
        "cues played: {:?}",
        world.feedback.played()
    );
}

#[then(regex = r"^the counter should be in (default|split) mode$")]
async fn then_mode_is(world: &mut CounterWorld, mode: String) {
    let expected = match mode.as_str() {
        "split" => DisplayMode::Split,
        _ => DisplayMode::Default,
    };
    assert_eq!(world.controller().view_model().mode(), expected);
}
