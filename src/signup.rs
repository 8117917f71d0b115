/* ===============================================================================
Food ordering app.
Signup screen. 24 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::str::FromStr;
use strum::{AsRefStr, EnumString,};
use tokio::task::AbortHandle;

use crate::auth::{self, Outcome,};
use crate::login;
use crate::states::{self, Dialogue, EventSender, HandlerResult, MainState, cancel_markup, kb_markup,};
use crate::surface::{Markup, Surface,};

const SUBMIT: &str = "Create Account";
const TOGGLE_SHOW: &str = "👁 password";
const TOGGLE_CONFIRM: &str = "👁 confirm";
const TOGGLE_TERMS: &str = "☑ I agree";
const LOG_IN: &str = "Log In";
const BACK: &str = "⏪Back";

// Screen commands
#[derive(Copy, Clone)]
enum Command {
   Edit(EditCmd),
   ToggleShow,
   ToggleConfirm,
   ToggleTerms,
   Submit,
   LogIn, // the "Already have an account?" link
   Back,
   Unknown,
}

// Form fields, edited one at a time
#[derive(Copy, Clone, AsRefStr, EnumString)]
pub enum EditCmd {
   #[strum(to_string = "Full Name")]
   FullName,
   #[strum(to_string = "Email")]
   Email,
   #[strum(to_string = "Password")]
   Password,
   #[strum(to_string = "Confirm Password")]
   Confirm,
}

impl Command {
   fn parse(s: &str) -> Self {
      if s == SUBMIT { Self::Submit }
      else if s == TOGGLE_SHOW { Self::ToggleShow }
      else if s == TOGGLE_CONFIRM { Self::ToggleConfirm }
      else if s == TOGGLE_TERMS { Self::ToggleTerms }
      else if s == LOG_IN { Self::LogIn }
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
pub struct SignupState {
   pub prev_state: MainState,
   pub full_name: String,
   pub email: String,
   pub password: String,
   pub confirm_password: String,
   pub show_password: bool,
   pub show_confirm: bool,
   pub agree_to_terms: bool,
   pub loading: bool,
   pub pending: Option<AbortHandle>, // the scheduled backend call
}

impl SignupState {
   // Cancel the backend call when the screen is torn down before it fires
   fn abort_pending(&mut self) {
      if let Some(handle) = self.pending.take() {
         handle.abort();
      }
   }
}

pub async fn enter(surface: &Surface, dialogue: &mut Dialogue, state: MainState) -> HandlerResult {
   let state = SignupState {
      prev_state: state,
      full_name: String::default(),
      email: String::default(),
      password: String::default(),
      confirm_password: String::default(),
      show_password: false,
      show_confirm: false,
      agree_to_terms: false,
      loading: false,
      pending: None,
   };
   dialogue.update(state.to_owned());
   view(surface, &state).await
}

fn masked(password: &str, show: bool) -> String {
   if show {
      String::from(password)
   } else {
      "•".repeat(password.chars().count())
   }
}

fn check_box(checked: bool) -> &'static str {
   if checked { "[x]" } else { "[ ]" }
}

async fn view(surface: &Surface, state: &SignupState) -> HandlerResult {
   let spinner = if state.loading { "\n\nCreating account..." } else { "" };
   let text = format!("Create Account\nSign up to get started with our app\n\n\
      Full Name: {}\nEmail: {}\nPassword: {}\nPassword must be at least 8 characters\n\
      Confirm Password: {}\n{} I agree to the Terms & Conditions and Privacy Policy{}",
      state.full_name, state.email,
      masked(&state.password, state.show_password),
      masked(&state.confirm_password, state.show_confirm),
      check_box(state.agree_to_terms), spinner);

   surface.show_with_markup(&text, &markup());
   Ok(())
}

pub async fn update(surface: &Surface, tx: &EventSender, dialogue: &mut Dialogue, mut state: SignupState, input: &str) -> HandlerResult {

   // Parse and handle commands
   let cmd = Command::parse(input);
   match cmd {
      Command::Edit(cmd) => {
         let new_state = SignupStateEditing { prev_state: state, cmd };
         dialogue.update(new_state.to_owned());
         enter_edit(surface, new_state).await
      }

      Command::ToggleShow => {
         state.show_password = !state.show_password;
         dialogue.update(state.to_owned());
         view(surface, &state).await
      }

      Command::ToggleConfirm => {
         state.show_confirm = !state.show_confirm;
         dialogue.update(state.to_owned());
         view(surface, &state).await
      }

      Command::ToggleTerms => {
         state.agree_to_terms = !state.agree_to_terms;
         dialogue.update(state.to_owned());
         view(surface, &state).await
      }

      Command::Submit => {
         // The button stays disabled until the terms are agreed and
         // while the simulated call is in flight
         if !state.agree_to_terms {
            surface.show("Please agree to the Terms & Conditions first");
         } else if !state.loading {
            state.loading = true;
            state.pending = Some(auth::schedule(tx.clone(), Outcome::SignedUp));
            dialogue.update(state.to_owned());
         }
         view(surface, &state).await
      }

      Command::LogIn => {
         state.abort_pending();
         login::enter(surface, dialogue, state.prev_state).await
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

// Completion of the simulated backend call: only the loading flag is
// cleared, the screen stays - exactly what the app does
pub async fn on_auth_done(surface: &Surface, dialogue: &mut Dialogue, mut state: SignupState, outcome: Outcome) -> HandlerResult {
   match outcome {
      Outcome::SignedUp if state.loading => {
         state.loading = false;
         state.pending = None;
         dialogue.update(state.to_owned());
         view(surface, &state).await
      }

      // A completion nobody awaits, the update is simply lost
      _ => {
         log::info!("signup::on_auth_done stray completion");
         Ok(())
      }
   }
}

fn markup() -> Markup {
   let row1 = vec![
      String::from(EditCmd::FullName.as_ref()),
      String::from(EditCmd::Email.as_ref()),
   ];
   let row2 = vec![
      String::from(EditCmd::Password.as_ref()),
      String::from(TOGGLE_SHOW),
   ];
   let row3 = vec![
      String::from(EditCmd::Confirm.as_ref()),
      String::from(TOGGLE_CONFIRM),
   ];
   let row4 = vec![String::from(TOGGLE_TERMS), String::from(SUBMIT)];
   let row5 = vec![String::from(LOG_IN), String::from(BACK)];

   kb_markup(vec![row1, row2, row3, row4, row5])
}

// ============================================================================
// [Fields editing mode]
// ============================================================================
#[derive(Clone)]
pub struct SignupStateEditing {
   prev_state: SignupState,
   cmd: EditCmd,
}

async fn enter_edit(surface: &Surface, state: SignupStateEditing) -> HandlerResult {
   let text = match state.cmd {
      EditCmd::FullName => format!("Enter your full name (current value is '{}') or press / to cancel", state.prev_state.full_name),
      EditCmd::Email => format!("Enter your email (current value is '{}') or press / to cancel", state.prev_state.email),
      EditCmd::Password => String::from("Create a password or press / to cancel"),
      EditCmd::Confirm => String::from("Confirm your password or press / to cancel"),
   };

   surface.show_with_markup(&text, &cancel_markup());
   Ok(())
}

pub async fn update_edit(surface: &Surface, dialogue: &mut Dialogue, state: SignupStateEditing, input: &str) -> HandlerResult {
   let mut new_state = state.prev_state;

   if input == "/" {
      surface.show("Cancel, value not changed");
   } else {
      // Store new value
      match state.cmd {
         EditCmd::FullName => new_state.full_name = String::from(input),
         EditCmd::Email => new_state.email = String::from(input),
         EditCmd::Password => new_state.password = String::from(input),
         EditCmd::Confirm => new_state.confirm_password = String::from(input),
      }
   }

   dialogue.update(new_state.to_owned());
   view(surface, &new_state).await
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::environment as env;
   use crate::states::State;
   use tokio::sync::mpsc;

   fn init_statics() {
      let _ = env::VARS.set(env::Vars::from_env());
   }

   async fn entered() -> (Surface, Dialogue) {
      let surface = Surface::new();
      let mut dialogue = Dialogue::new();
      enter(&surface, &mut dialogue, MainState::default()).await.unwrap();
      (surface, dialogue)
   }

   fn signup_state(dialogue: &Dialogue) -> SignupState {
      match dialogue.state() {
         State::Signup(s) => s.to_owned(),
         _ => panic!("signup state expected"),
      }
   }

   #[tokio::test]
   async fn submit_gated_by_terms() {
      init_statics();
      let (surface, mut dialogue) = entered().await;
      let (tx, _rx) = mpsc::unbounded_channel();

      // Without the gate nothing is scheduled
      let state = signup_state(&dialogue);
      update(&surface, &tx, &mut dialogue, state, "Create Account").await.unwrap();
      let state = signup_state(&dialogue);
      assert!(!state.loading);
      assert!(state.pending.is_none());

      // Agree and submit
      update(&surface, &tx, &mut dialogue, state, "☑ I agree").await.unwrap();
      let state = signup_state(&dialogue);
      assert!(state.agree_to_terms);

      update(&surface, &tx, &mut dialogue, state, "Create Account").await.unwrap();
      let state = signup_state(&dialogue);
      assert!(state.loading);
      assert!(state.pending.is_some());
   }

   #[tokio::test]
   async fn completion_only_clears_loading() {
      init_statics();
      let (surface, mut dialogue) = entered().await;

      let mut state = signup_state(&dialogue);
      state.loading = true;
      on_auth_done(&surface, &mut dialogue, state, Outcome::SignedUp).await.unwrap();

      // Still on the signup screen, no navigation
      let state = signup_state(&dialogue);
      assert!(!state.loading);
      assert!(state.pending.is_none());
   }

   #[tokio::test]
   async fn field_editing_round_trip() {
      init_statics();
      let (surface, mut dialogue) = entered().await;
      let (tx, _rx) = mpsc::unbounded_channel();

      let state = signup_state(&dialogue);
      update(&surface, &tx, &mut dialogue, state, "Full Name").await.unwrap();

      let editing = match dialogue.state() {
         State::SignupEditing(s) => s.to_owned(),
         _ => panic!("editing state expected"),
      };
      update_edit(&surface, &mut dialogue, editing, "Ivan Petrov").await.unwrap();

      let state = signup_state(&dialogue);
      assert_eq!(state.full_name, "Ivan Petrov");
   }
}
