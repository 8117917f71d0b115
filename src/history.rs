/* ===============================================================================
Food ordering app.
Orders screen: history with statuses. 22 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use lazy_static::lazy_static;
use regex::Regex;
use smart_default::SmartDefault;
use strum::{EnumMessage, IntoEnumIterator,};

use crate::dashboard;
use crate::environment as env;
use crate::order::{self, Order, Status,};
use crate::states::{Dialogue, HandlerResult, MainState, kb_markup,};
use crate::surface::{Markup, Surface,};

// Pseudo-status to display the whole history
const ALL_STATUSES: &str = "All";

const EXPAND: &str = "/exp";

// History filter, one concrete status or everything
#[derive(Copy, Clone, PartialEq, SmartDefault)]
pub enum Filter {
   #[default]
   All,
   Status(Status),
}

// Screen commands
enum Command {
   Filter(Filter),
   Toggle(String), // expand or collapse the order
   Unknown,
}

impl Command {
   fn parse(s: &str) -> Self {
      if s == ALL_STATUSES {
         return Self::Filter(Filter::All);
      }

      // Status buttons carry the human caption
      if let Some(status) = Status::iter().find(|status| status.get_message() == Some(s)) {
         return Self::Filter(Filter::Status(status));
      }

      // Looking for the commands with arguments
      lazy_static! {
         static ref EXPAND_REGEX: Regex = Regex::new(r"^/exp(ORD-\d+)$").unwrap();
      }
      match EXPAND_REGEX.captures(s) {
         Some(caps) => Self::Toggle(String::from(&caps[1])),
         None => Self::Unknown,
      }
   }
}

// At most one order is expanded, the state is a single optional id
#[derive(Clone)]
pub struct HistoryState {
   pub prev_state: MainState,
   pub filter: Filter,
   pub expanded: Option<String>,
}

impl HistoryState {
   // Expands a collapsed order, collapses an expanded one. Selecting
   // a second order collapses the first
   pub fn toggle_expanded(&mut self, order_id: &str) {
      if self.expanded.as_deref() == Some(order_id) {
         self.expanded = None;
      } else {
         self.expanded = Some(String::from(order_id));
      }
   }
}

// Lazy over the history, everything for All
pub fn filter_by_status(orders: &[Order], filter: Filter) -> impl Iterator<Item = &Order> {
   orders.iter()
   .filter(move |order| match filter {
      Filter::All => true,
      Filter::Status(status) => order.status == status,
   })
}

pub async fn enter(surface: &Surface, dialogue: &mut Dialogue, state: MainState) -> HandlerResult {
   let state = HistoryState {
      prev_state: state,
      filter: Filter::default(),
      expanded: None,
   };
   dialogue.update(state.to_owned());
   view(surface, &state).await
}

async fn view(surface: &Surface, state: &HistoryState) -> HandlerResult {
   let orders = order::orders();

   let list = filter_by_status(orders, state.filter)
   .fold(String::default(), |acc, order| {
      let expanded = state.expanded.as_deref() == Some(order.id.as_str());
      format!("{}\n{}", acc, order_text(order, expanded))
   });

   let text = if list.is_empty() {
      String::from("🧾 My Orders\n\nNo orders here yet")
   } else {
      format!("🧾 My Orders\n{}", list)
   };
   surface.show_with_markup(&text, &markup());
   Ok(())
}

pub async fn update(surface: &Surface, dialogue: &mut Dialogue, mut state: HistoryState, input: &str) -> HandlerResult {

   // Parse and handle commands
   let cmd = Command::parse(input);
   match cmd {
      Command::Filter(filter) => {
         state.filter = filter;
         dialogue.update(state.to_owned());
         view(surface, &state).await
      }

      Command::Toggle(order_id) => {
         state.toggle_expanded(&order_id);
         dialogue.update(state.to_owned());
         view(surface, &state).await
      }

      // Tab switching and everything else
      Command::Unknown => dashboard::update(surface, dialogue, state.prev_state, input).await,
   }
}

fn order_text(order: &Order, expanded: bool) -> String {
   let caption = order.status.get_message().unwrap_or_default();
   let head = format!("{} · {} · {} · {} {}{}",
      order.id, order.created.format("%d.%m.%Y %H:%M"),
      env::price_with_unit(order.total), caption, EXPAND, order.id);

   if !expanded {
      return head;
   }

   // Line items of the expanded order
   order.lines.iter()
   .fold(head, |acc, line| {
      format!("{}\n   {}: {} x {} pcs. = {}",
         acc, line.title, env::price_with_unit(line.price), line.amount,
         env::price_with_unit(line.cost()))
   })
}

fn markup() -> Markup {
   let mut statuses = vec![String::from(ALL_STATUSES)];
   for status in Status::iter() {
      statuses.push(String::from(status.get_message().unwrap_or_default()));
   }

   let keyboard = vec![statuses, dashboard::tab_row()];
   kb_markup(keyboard)
}
