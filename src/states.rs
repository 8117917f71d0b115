/* ===============================================================================
Food ordering app.
Screen FSM and dispatch. 18 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use derive_more::From;
use smart_default::SmartDefault;
use std::str::FromStr;
use strum::{AsRefStr, EnumString,};

use crate::auth;
use crate::foods::{self, FoodsState,};
use crate::history::{self, HistoryState,};
use crate::login::{self, LoginState, LoginStateEditing,};
use crate::profile::{self, ProfileState,};
use crate::settings::{self, SettingsState,};
use crate::signup::{self, SignupState, SignupStateEditing,};
use crate::surface::{Markup, Surface,};

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
pub type EventSender = tokio::sync::mpsc::UnboundedSender<UiEvent>;

// Everything the screens can react to: a tap from the surface or the
// completion of the simulated backend call
pub enum UiEvent {
   Tap(String),
   AuthDone(auth::Outcome),
}

// Session context threaded through all screens
#[derive(Clone, SmartDefault)]
pub struct MainState {
   // Who is signed in, None before login
   pub user: Option<String>,

   #[default(true)]
   pub restarted: bool,
}

// FSM states, one per screen
#[derive(Clone, From)]
pub enum State {
   Start(MainState), // welcome screen
   Login(LoginState),
   LoginEditing(LoginStateEditing), // login field input submode
   Signup(SignupState),
   SignupEditing(SignupStateEditing), // signup field input submode
   Foods(FoodsState), // dashboard, foods tab
   History(HistoryState), // dashboard, orders tab
   Profile(ProfileState), // dashboard, profile tab
   Settings(SettingsState), // dashboard, settings tab
}

impl Default for State {
   fn default() -> Self {
      Self::Start(MainState::default())
   }
}

// Navigation service: owns the active screen state, "navigate to X" is
// an update. The in-memory analog of the framework's screen router
pub struct Dialogue {
   state: State,
}

impl Dialogue {
   pub fn new() -> Self {
      Self { state: State::default() }
   }

   pub fn state(&self) -> &State {
      &self.state
   }

   pub fn update<S>(&mut self, state: S)
   where S: Into<State>
   {
      self.state = state.into();
   }
}

// Welcome screen menu
#[derive(AsRefStr, EnumString)]
enum Command {
   #[strum(to_string = "Log In")]
   LogIn,
   #[strum(to_string = "Create Account")]
   SignUp,
   Unknown,
}

// Construct markup from caption rows
pub fn kb_markup(keyboard: Vec<Vec<String>>) -> Markup {
   Markup::new(keyboard)
}

// Frequently used menu
pub fn cancel_markup() -> Markup {
   kb_markup(vec![vec![String::from("/")]])
}

pub fn welcome_markup() -> Markup {
   let commands = vec![
      String::from(Command::LogIn.as_ref()),
      String::from(Command::SignUp.as_ref()),
   ];
   kb_markup(vec![commands])
}

// Show the welcome screen again, used by screens exiting to the start
pub async fn reload(surface: &Surface, dialogue: &mut Dialogue, state: MainState) -> HandlerResult {
   let text = "Welcome\n\nSign in to continue or create a new account";
   surface.show_with_markup(text, &welcome_markup());
   dialogue.update(state);
   Ok(())
}

// Welcome screen handler
pub async fn enter(surface: &Surface, dialogue: &mut Dialogue, state: MainState, ans: String) -> HandlerResult {

   // Try to execute command and if it impossible notify about restart
   let cmd = Command::from_str(ans.as_str()).unwrap_or(Command::Unknown);
   match cmd {
      Command::LogIn => login::enter(surface, dialogue, state).await,

      Command::SignUp => signup::enter(surface, dialogue, state).await,

      Command::Unknown => {
         // Report about a possible restart and loss of context
         if state.restarted {
            surface.show("Sorry, the app was restarted");
         }

         let new_state = MainState { restarted: false, ..state };
         reload(surface, dialogue, new_state).await
      }
   }
}

// Dispatch an event to the active screen
pub async fn handle(surface: &Surface, tx: &EventSender, dialogue: &mut Dialogue, event: UiEvent) -> HandlerResult {
   let state = dialogue.state().to_owned();
   match event {
      UiEvent::Tap(input) => match state {
         State::Start(s) => enter(surface, dialogue, s, input).await,
         State::Login(s) => login::update(surface, tx, dialogue, s, &input).await,
         State::LoginEditing(s) => login::update_edit(surface, dialogue, s, &input).await,
         State::Signup(s) => signup::update(surface, tx, dialogue, s, &input).await,
         State::SignupEditing(s) => signup::update_edit(surface, dialogue, s, &input).await,
         State::Foods(s) => foods::update(surface, dialogue, s, &input).await,
         State::History(s) => history::update(surface, dialogue, s, &input).await,
         State::Profile(s) => profile::update(surface, dialogue, s, &input).await,
         State::Settings(s) => settings::update(surface, dialogue, s, &input).await,
      },

      UiEvent::AuthDone(outcome) => match state {
         State::Login(s) => login::on_auth_done(surface, dialogue, s, outcome).await,
         State::Signup(s) => signup::on_auth_done(surface, dialogue, s, outcome).await,

         // The initiating screen is gone, the update is simply lost
         _ => {
            log::info!("states::handle auth completion with no awaiting screen");
            Ok(())
         }
      },
   }
}
