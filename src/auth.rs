/* ===============================================================================
Food ordering app.
Simulated backend call for login and signup. 19 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use tokio::task::AbortHandle;

use crate::environment as env;
use crate::states::{EventSender, UiEvent,};

// What the "backend" reports back. It always succeeds, there is no
// error path to simulate
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
   LoggedIn(String), // the signed in user
   SignedUp,
}

// One delay, then one completion event into the app channel. The
// returned handle lets the initiating screen cancel on teardown,
// otherwise a completion nobody awaits is dropped by the dispatcher
pub fn schedule(tx: EventSender, outcome: Outcome) -> AbortHandle {
   let task = tokio::spawn(async move {
      tokio::time::sleep(env::auth_delay()).await;
      if tx.send(UiEvent::AuthDone(outcome)).is_err() {
         log::info!("auth::schedule app loop is gone, completion lost");
      }
   });
   task.abort_handle()
}

#[cfg(test)]
mod tests {
   use super::*;
   use std::time::Duration;
   use tokio::sync::mpsc;

   fn init_vars() {
      let _ = env::VARS.set(env::Vars::from_env());
   }

   #[tokio::test(start_paused = true)]
   async fn completion_arrives_after_delay() {
      init_vars();
      let (tx, mut rx) = mpsc::unbounded_channel();
      schedule(tx, Outcome::LoggedIn(String::from("eater@example.com")));

      // Paused clock skips over the delay once the runtime is idle
      let event = rx.recv().await.unwrap();
      match event {
         UiEvent::AuthDone(Outcome::LoggedIn(user)) => assert_eq!(user, "eater@example.com"),
         _ => panic!("unexpected event"),
      }
   }

   #[tokio::test(start_paused = true)]
   async fn aborted_task_sends_nothing() {
      init_vars();
      let (tx, mut rx) = mpsc::unbounded_channel();
      let handle = schedule(tx, Outcome::SignedUp);
      handle.abort();

      tokio::time::sleep(Duration::from_secs(10)).await;
      assert!(rx.try_recv().is_err());
   }
}
