/* ===============================================================================
Food ordering app.
Settings screen. 25 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::dashboard;
use crate::environment as env;
use crate::states::{Dialogue, HandlerResult, MainState,};
use crate::surface::Surface;

#[derive(Clone)]
pub struct SettingsState {
   pub prev_state: MainState,
}

pub async fn enter(surface: &Surface, dialogue: &mut Dialogue, state: MainState) -> HandlerResult {
   let state = SettingsState { prev_state: state };
   dialogue.update(state.to_owned());
   view(surface, &state).await
}

async fn view(surface: &Surface, _state: &SettingsState) -> HandlerResult {
   let text = format!("⚙ Settings\n\nTime zone: {}\nYour settings will be listed here", env::time_zone_info());
   surface.show_with_markup(&text, &dashboard::tab_markup());
   Ok(())
}

// Tab switching and everything else
pub async fn update(surface: &Surface, dialogue: &mut Dialogue, state: SettingsState, input: &str) -> HandlerResult {
   dashboard::update(surface, dialogue, state.prev_state, input).await
}
