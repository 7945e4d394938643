//! Step definitions for the application lifecycle
//!
//! - Launching with and without `--split`
//! - Key presses by name, Ctrl+C and quitting
//! - Terminal resize and restoration on exit

use crate::common::world::CounterWorld;
use crossterm::event::{Event, KeyCode};
use cucumber::{given, then, when};
use tracing::debug;

fn key_code(name: &str) -> KeyCode {
    match name {
        "Enter" => KeyCode::Enter,
        "Escape" | "Esc" => KeyCode::Esc,
        "Backspace" => KeyCode::Backspace,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Space" => KeyCode::Char(' '),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => panic!("unknown key name {other:?}"),
            }
        }
    }
}

#[given("the counter app is running")]
async fn given_app_running(world: &mut CounterWorld) {
    world.start().expect("Failed to start application");
}

#[given("the counter app is running in split mode")]
async fn given_app_running_split(world: &mut CounterWorld) {
    world.config.start_in_split_mode = true;
    world.start().expect("Failed to start application");
}

#[given(regex = r"^the terminal is (\d+) columns wide and (\d+) rows tall$")]
async fn given_terminal_size(world: &mut CounterWorld, width: u16, height: u16) {
    world.terminal_size = (width, height);
}

#[when(regex = r#"^I press "([^"]+)"$"#)]
async fn when_press_key(world: &mut CounterWorld, name: String) {
    debug!("Pressing {}", name);
    world.press_key(key_code(&name));
}

#[when(regex = r#"^I press "([^"]+)" (\d+) times$"#)]
async fn when_press_key_times(world: &mut CounterWorld, name: String, times: usize) {
    let code = key_code(&name);
    for _ in 0..times {
        world.press_key(code);
    }
}

#[when("I press Ctrl+C")]
async fn when_press_ctrl_c(world: &mut CounterWorld) {
    world.press_ctrl('c');
}

#[when(regex = r"^the terminal is resized to (\d+)x(\d+)$")]
async fn when_terminal_resized(world: &mut CounterWorld, width: u16, height: u16) {
    world.send_event(Event::Resize(width, height));
}

#[when("the application exits")]
async fn when_application_exits(world: &mut CounterWorld) {
    world.controller_mut().run().expect("run failed");
}

#[then("the application should quit")]
async fn then_should_quit(world: &mut CounterWorld) {
    assert!(world.controller().should_quit(), "application is still running");
}

#[then("the application should still be running")]
async fn then_still_running(world: &mut CounterWorld) {
    assert!(!world.controller().should_quit(), "application quit");
}

#[then("the terminal should be restored")]
async fn then_terminal_restored(world: &mut CounterWorld) {
    let stream = world.controller().render_stream();
    assert!(!stream.is_raw_mode(), "raw mode still enabled");
    assert!(!stream.is_alternate_screen(), "still on alternate screen");
    assert!(!stream.is_mouse_capture(), "mouse capture still enabled");
    assert!(stream.is_cursor_visible(), "cursor still hidden");
}

#[then(regex = r"^the layout should be (\d+)x(\d+)$")]
async fn then_layout_size(world: &mut CounterWorld, width: u16, height: u16) {
    assert_eq!(
        world.controller().view_model().terminal_size(),
        (width, height)
    );
}
