/* ===============================================================================
Food ordering app.
Login screen. 23 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::str::FromStr;
use strum::{AsRefStr, EnumString,};
use tokio::task::AbortHandle;

use crate::auth::{self, Outcome,};
use crate::foods;
use crate::signup;
use crate::states::{self, Dialogue, EventSender, HandlerResult, MainState, cancel_markup, kb_markup,};
use crate::surface::{Markup, Surface,};

const SUBMIT: &str = "Log In";
const TOGGLE_SHOW: &str = "👁";
const SIGN_UP: &str = "Create Account";
const BACK: &str = "⏪Back";

// Screen commands
#[derive(Copy, Clone)]
enum Command {
   Edit(EditCmd),
   ToggleShow,
   Submit,
   SignUp, // the "Don't have an account?" link
   Back,
   Unknown,
}

// Form fields, edited one at a time
#[derive(Copy, Clone, AsRefStr, EnumString)]
pub enum EditCmd {
   #[strum(to_string = "Email")]
   Email,
   #[strum(to_string = "Password")]
   Password,
}

impl Command {
   fn parse(s: &str) -> Self {
      if s == SUBMIT { Self::Submit }
      else if s == TOGGLE_SHOW { Self::ToggleShow }
      else if s == SIGN_UP { Self::SignUp }
      else if s == BACK { Self::Back }
      else {
         match EditCmd::from_str(s) {
            Ok(cmd) => Self::Edit(cmd),
            Err(_) => Self::Unknown,
         }
      }
   }
}

#[derive(Clone)]
pub struct LoginState {
   pub prev_state: MainState,
   pub email: String,
   pub password: String,
   pub show_password: bool,
   pub loading: bool,
   pub pending: Option<AbortHandle>, // the scheduled backend call
}

impl LoginState {
   // Cancel the backend call when the screen is torn down before it fires
   fn abort_pending(&mut self) {
      if let Some(handle) = self.pending.take() {
         handle.abort();
      }
   }
}

pub async fn enter(surface: &Surface, dialogue: &mut Dialogue, state: MainState) -> HandlerResult {
   let state = LoginState {
      prev_state: state,
      email: String::default(),
      password: String::default(),
      show_password: false,
      loading: false,
      pending: None,
   };
   dialogue.update(state.to_owned());
   view(surface, &state).await
}

// Password stars instead of characters unless the eye is pressed
fn masked(password: &str, show: bool) -> String {
   if show {
      String::from(password)
   } else {
      "•".repeat(password.chars().count())
   }
}

async fn view(surface: &Surface, state: &LoginState) -> HandlerResult {
   let spinner = if state.loading { "\n\nSigning in..." } else { "" };
   let text = format!("Welcome Back\nLog in to your account to continue\n\nEmail: {}\nPassword: {}{}",
      state.email, masked(&state.password, state.show_password), spinner);

   surface.show_with_markup(&text, &markup());
   Ok(())
}

pub async fn update(surface: &Surface, tx: &EventSender, dialogue: &mut Dialogue, mut state: LoginState, input: &str) -> HandlerResult {

   // Parse and handle commands
   let cmd = Command::parse(input);
   match cmd {
      Command::Edit(cmd) => {
         let new_state = LoginStateEditing { prev_state: state, cmd };
         dialogue.update(new_state.to_owned());
         enter_edit(surface, new_state).await
      }

      Command::ToggleShow => {
         state.show_password = !state.show_password;
         dialogue.update(state.to_owned());
         view(surface, &state).await
      }

      Command::Submit => {
         // The button is disabled while the simulated call is in flight
         if !state.loading {
            state.loading = true;
            let outcome = Outcome::LoggedIn(state.email.clone());
            state.pending = Some(auth::schedule(tx.clone(), outcome));
            dialogue.update(state.to_owned());
         }
         view(surface, &state).await
      }

      Command::SignUp => {
         state.abort_pending();
         signup::enter(surface, dialogue, state.prev_state).await
      }

      Command::Back => {
         state.abort_pending();
         states::reload(surface, dialogue, state.prev_state).await
      }

      Command::Unknown => {
         surface.show("Unknown command, use the buttons below");
         view(surface, &state).await
      }
   }
}

// Completion of the simulated backend call. It always succeeds and
// the app proceeds to the dashboard
pub async fn on_auth_done(surface: &Surface, dialogue: &mut Dialogue, mut state: LoginState, outcome: Outcome) -> HandlerResult {
   match outcome {
      Outcome::LoggedIn(user) if state.loading => {
         state.loading = false;
         state.pending = None;
         let new_state = MainState { user: Some(user), restarted: false };
         foods::enter(surface, dialogue, new_state).await
      }

      // A completion nobody awaits, the update is simply lost
      _ => {
         log::info!("login::on_auth_done stray completion");
         Ok(())
      }
   }
}

fn markup() -> Markup {
   let row1 = vec![
      String::from(EditCmd::Email.as_ref()),
      String::from(EditCmd::Password.as_ref()),
      String::from(TOGGLE_SHOW),
   ];
   let row2 = vec![String::from(SUBMIT)];
   let row3 = vec![String::from(SIGN_UP), String::from(BACK)];

   kb_markup(vec![row1, row2, row3])
}

// ============================================================================
// [Fields editing mode]
// ============================================================================
#[derive(Clone)]
pub struct LoginStateEditing {
   prev_state: LoginState,
   cmd: EditCmd,
}

async fn enter_edit(surface: &Surface, state: LoginStateEditing) -> HandlerResult {
   let text = match state.cmd {
      EditCmd::Email => format!("Enter your email (current value is '{}') or press / to cancel", state.prev_state.email),
      EditCmd::Password => String::from("Enter your password or press / to cancel"),
   };

   surface.show_with_markup(&text, &cancel_markup());
   Ok(())
}

pub async fn update_edit(surface: &Surface, dialogue: &mut Dialogue, state: LoginStateEditing, input: &str) -> HandlerResult {
   let mut new_state = state.prev_state;

   if input == "/" {
      surface.show("Cancel, value not changed");
   } else {
      // Store new value
      match state.cmd {
         EditCmd::Email => new_state.email = String::from(input),
         EditCmd::Password => new_state.password = String::from(input),
      }
   }

   dialogue.update(new_state.to_owned());
   view(surface, &new_state).await
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::catalog::{Catalog, CATALOG,};
   use crate::environment as env;
   use crate::states::State;
   use tokio::sync::mpsc;

   fn init_statics() {
      let _ = env::VARS.set(env::Vars::from_env());
      let _ = CATALOG.set(Catalog::seed());
   }

   async fn entered() -> (Surface, Dialogue) {
      let surface = Surface::new();
      let mut dialogue = Dialogue::new();
      enter(&surface, &mut dialogue, MainState::default()).await.unwrap();
      (surface, dialogue)
   }

   fn login_state(dialogue: &Dialogue) -> LoginState {
      match dialogue.state() {
         State::Login(s) => s.to_owned(),
         _ => panic!("login state expected"),
      }
   }

   #[tokio::test]
   async fn field_editing_round_trip() {
      init_statics();
      let (surface, mut dialogue) = entered().await;
      let (tx, _rx) = mpsc::unbounded_channel();

      let state = login_state(&dialogue);
      update(&surface, &tx, &mut dialogue, state, "Email").await.unwrap();
      assert!(matches!(dialogue.state(), State::LoginEditing(_)));

      let editing = match dialogue.state() {
         State::LoginEditing(s) => s.to_owned(),
         _ => panic!("editing state expected"),
      };
      update_edit(&surface, &mut dialogue, editing, "eater@example.com").await.unwrap();

      let state = login_state(&dialogue);
      assert_eq!(state.email, "eater@example.com");
   }

   #[tokio::test]
   async fn cancel_keeps_value() {
      init_statics();
      let (surface, mut dialogue) = entered().await;
      let (tx, _rx) = mpsc::unbounded_channel();

      let mut state = login_state(&dialogue);
      state.password = String::from("secret");
      update(&surface, &tx, &mut dialogue, state, "Password").await.unwrap();

      let editing = match dialogue.state() {
         State::LoginEditing(s) => s.to_owned(),
         _ => panic!("editing state expected"),
      };
      update_edit(&surface, &mut dialogue, editing, "/").await.unwrap();

      let state = login_state(&dialogue);
      assert_eq!(state.password, "secret");
   }

   #[tokio::test]
   async fn submit_schedules_single_call() {
      init_statics();
      let (surface, mut dialogue) = entered().await;
      let (tx, _rx) = mpsc::unbounded_channel();

      let state = login_state(&dialogue);
      update(&surface, &tx, &mut dialogue, state, "Log In").await.unwrap();

      let state = login_state(&dialogue);
      assert!(state.loading);
      assert!(state.pending.is_some());

      // The second tap is ignored while in flight
      update(&surface, &tx, &mut dialogue, state, "Log In").await.unwrap();
      assert!(login_state(&dialogue).loading);
   }

   #[tokio::test]
   async fn completion_navigates_to_dashboard() {
      init_statics();
      let (surface, mut dialogue) = entered().await;

      let mut state = login_state(&dialogue);
      state.email = String::from("eater@example.com");
      state.loading = true;

      let outcome = Outcome::LoggedIn(state.email.clone());
      on_auth_done(&surface, &mut dialogue, state, outcome).await.unwrap();

      match dialogue.state() {
         State::Foods(s) => assert_eq!(s.prev_state.user.as_deref(), Some("eater@example.com")),
         _ => panic!("dashboard expected after login"),
      }
   }

   #[tokio::test]
   async fn stray_completion_is_dropped() {
      init_statics();
      let (surface, mut dialogue) = entered().await;

      // Not loading - the screen never asked for a call
      let state = login_state(&dialogue);
      on_auth_done(&surface, &mut dialogue, state, Outcome::SignedUp).await.unwrap();
      assert!(matches!(dialogue.state(), State::Login(_)));
   }

   #[test]
   fn masked_hides_by_default() {
      assert_eq!(masked("secret", false), "••••••");
      assert_eq!(masked("secret", true), "secret");
   }
}
