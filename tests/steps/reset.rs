//! Step definitions for the reset dialog

use crate::common::world::CounterWorld;
use crossterm::event::KeyCode;
use cucumber::{then, when};
use tapcounter::app::geometry::Button;

#[when(regex = r#"^I submit "([^"]*)" in the reset dialog$"#)]
async fn when_submit_reset(world: &mut CounterWorld, text: String) {
    world.click_button(Button::Reset);
    world.type_text(&text);
    world.press_key(KeyCode::Enter);
}

#[when(regex = r#"^I type "([^"]*)"$"#)]
async fn when_type(world: &mut CounterWorld, text: String) {
    world.type_text(&text);
}

#[then("the reset dialog should be open")]
async fn then_dialog_open(world: &mut CounterWorld) {
    assert!(world.controller().view_model().is_reset_prompt_open());
}

#[then("the reset dialog should be closed")]
async fn then_dialog_closed(world: &mut CounterWorld) {
    assert!(!world.controller().view_model().is_reset_prompt_open());
}

#[then(regex = r#"^the reset input should be "([^"]*)"$"#)]
async fn then_reset_input(world: &mut CounterWorld, text: String) {
    assert_eq!(
        world.controller().view_model().reset_input(),
        Some(text.as_str())
    );
}
