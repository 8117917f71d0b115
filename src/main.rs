/* ===============================================================================
Food ordering app.
Main module. 12 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use futures::StreamExt;
use pretty_env_logger::env_logger;
use text_io::read;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

mod auth;
mod cart;
mod catalog;
mod dashboard;
mod environment;
mod foods;
mod history;
mod login;
mod menu;
mod order;
mod profile;
mod settings;
mod signup;
mod states;
mod surface;
use crate::states::*;

// ============================================================================
// [Run!]
// ============================================================================
#[tokio::main]
async fn main() {
   run().await;
}

// Taps from the terminal into the event channel. A dedicated thread,
// stdin has no async reader to offer
fn listen_taps(tx: EventSender) {
   std::thread::spawn(move || loop {
      let line: String = read!("{}\n");
      let line = String::from(line.trim());
      if tx.send(UiEvent::Tap(line)).is_err() {
         break; // the app loop is gone
      }
   });
}

async fn run() {
   let mut builder = pretty_env_logger::formatted_builder();
   builder.target(env_logger::Target::Stdout);
   builder.init();

   log::info!("Starting...");

   // Settings from environments
   match environment::VARS.set(environment::Vars::from_env()) {
      Ok(_) => log::info!("Environment loaded"),
      _ => log::info!("Something wrong with environment"),
   }

   // Static catalogs instead of a backend fetch, immutable for the
   // process lifetime
   match catalog::CATALOG.set(catalog::Catalog::seed()) {
      Ok(_) => log::info!("Catalog seeded"),
      _ => log::info!("Something wrong with catalog"),
   }
   match order::ORDERS.set(order::seed()) {
      Ok(_) => log::info!("Order history seeded"),
      _ => log::info!("Something wrong with order history"),
   }

   let surface = surface::Surface::new();
   let mut dialogue = Dialogue::new();

   let (tx, rx) = mpsc::unbounded_channel();
   listen_taps(tx.clone());

   // The welcome screen before the first tap
   if let Err(err) = reload(&surface, &mut dialogue, MainState::default()).await {
      log::error!("main::welcome: {:?}", err);
   }

   // Taps and timer completions, one at a time - every mutation fully
   // completes before the next event is polled
   let mut stream = UnboundedReceiverStream::new(rx);
   while let Some(event) = stream.next().await {
      if let Err(err) = handle(&surface, &tx, &mut dialogue, event).await {
         log::error!("main::handle_error: {:?}", err);
      }
   }
}
