//! Step definitions for rendered output
//!
//! Every check forces a full redraw first, so the captured text is exactly
//! what the screen shows.

use crate::common::world::CounterWorld;
use cucumber::then;

#[then(regex = r#"^the screen should show "([^"]+)"$"#)]
async fn then_screen_shows(world: &mut CounterWorld, text: String) {
    let screen = world.screen_text();
    assert!(
        screen.contains(&text),
        "expected {text:?} on screen, got:\n{screen}"
    );
}

#[then(regex = r#"^the screen should not show "([^"]+)"$"#)]
async fn then_screen_does_not_show(world: &mut CounterWorld, text: String) {
    let screen = world.screen_text();
    assert!(
        !screen.contains(&text),
        "did not expect {text:?} on screen, got:\n{screen}"
    );
}

#[then(regex = r"^the digit cells should read (.+)$")]
async fn then_digit_cells(world: &mut CounterWorld, digits: String) {
    let row: String = digits
        .split_whitespace()
        .map(|digit| format!("  {digit}  │"))
        .collect();
    let expected = format!("│{row}");
    let screen = world.screen_text();
    assert!(
        screen.contains(&expected),
        "expected cells {expected:?}, got:\n{screen}"
    );
}
