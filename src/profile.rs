/* ===============================================================================
Food ordering app.
Profile screen. 25 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::dashboard;
use crate::states::{self, Dialogue, HandlerResult, MainState, kb_markup,};
use crate::surface::{Markup, Surface,};

const LOG_OUT: &str = "Log Out";

#[derive(Clone)]
pub struct ProfileState {
   pub prev_state: MainState,
}

pub async fn enter(surface: &Surface, dialogue: &mut Dialogue, state: MainState) -> HandlerResult {
   let state = ProfileState { prev_state: state };
   dialogue.update(state.to_owned());
   view(surface, &state).await
}

async fn view(surface: &Surface, state: &ProfileState) -> HandlerResult {
   let user = state.prev_state.user.as_deref().unwrap_or("-");
   let text = format!("👤 Profile\n\n{}\nYour profile will be listed here", user);
   surface.show_with_markup(&text, &markup());
   Ok(())
}

pub async fn update(surface: &Surface, dialogue: &mut Dialogue, state: ProfileState, input: &str) -> HandlerResult {
   if input == LOG_OUT {
      // Drop the session and return to the welcome screen
      let new_state = MainState { user: None, restarted: false };
      states::reload(surface, dialogue, new_state).await
   } else {
      // Tab switching and everything else
      dashboard::update(surface, dialogue, state.prev_state, input).await
   }
}

fn markup() -> Markup {
   kb_markup(vec![vec![String::from(LOG_OUT)], dashboard::tab_row()])
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::states::State;

   #[tokio::test]
   async fn log_out_returns_to_welcome() {
      let surface = Surface::new();
      let mut dialogue = Dialogue::new();
      let signed_in = MainState { user: Some(String::from("eater@example.com")), restarted: false };
      enter(&surface, &mut dialogue, signed_in).await.unwrap();

      let state = match dialogue.state() {
         State::Profile(s) => s.to_owned(),
         _ => panic!("profile state expected"),
      };
      update(&surface, &mut dialogue, state, "Log Out").await.unwrap();

      match dialogue.state() {
         State::Start(s) => assert!(s.user.is_none()),
         _ => panic!("welcome expected after logout"),
      }
   }
}
