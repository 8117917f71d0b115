/* ===============================================================================
Food ordering app.
Foods screen: catalog listing and the cart. 21 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::cart::CartLedger;
use crate::catalog::{self, Catalog, ALL_CATEGORIES,};
use crate::dashboard;
use crate::environment as env;
use crate::order::{self, Order,};
use crate::states::{Dialogue, HandlerResult, MainState, kb_markup,};
use crate::surface::{Markup, Surface,};

const INC: &str = "/inc";
const DEC: &str = "/dec";
const CHECKOUT: &str = "Checkout";

// Screen commands
#[derive(Clone)]
enum Command {
   Category(String), // filter the listing
   Inc(String), // plus one item to the cart
   Dec(String), // minus one item from the cart
   Checkout,
   Unknown,
}

impl Command {
   fn parse(s: &str, catalog: &Catalog) -> Self {
      if s == CHECKOUT { Self::Checkout }
      else if catalog.categories().contains(&s) { Self::Category(String::from(s)) }
      else {
         // Looking for the commands with arguments
         let l_part = s.get(..4).unwrap_or_default();
         let r_part = s.get(4..).unwrap_or_default();
         if l_part == INC { Self::Inc(String::from(r_part)) }
         else if l_part == DEC { Self::Dec(String::from(r_part)) }
         else { Self::Unknown }
      }
   }
}

// The ledger is created empty with the screen and discarded with it,
// nothing survives the session
#[derive(Clone)]
pub struct FoodsState {
   pub prev_state: MainState,
   pub category: String,
   pub ledger: CartLedger,
}

pub async fn enter(surface: &Surface, dialogue: &mut Dialogue, state: MainState) -> HandlerResult {
   let state = FoodsState {
      prev_state: state,
      category: String::from(ALL_CATEGORIES),
      ledger: CartLedger::new(),
   };
   dialogue.update(state.to_owned());
   view(surface, &state).await
}

async fn view(surface: &Surface, state: &FoodsState) -> HandlerResult {
   let catalog = catalog::catalog();

   // Filtered listing with per-item cart amounts and commands
   let items = catalog.filter_by_category(&state.category)
   .fold(String::default(), |acc, item| {
      let amount = state.ledger.amount(&item.id);
      let in_cart = if amount > 0 { format!(" · {} pcs", amount) } else { String::default() };
      format!("{}\n{} ⭐{:.1}\n{}\n+🛒 {}{} · -🛒 {}{}{}\n",
         acc, item.title_with_price(), item.rating, item.descr,
         INC, item.id, DEC, item.id, in_cart)
   });

   // Announce
   let info = state.ledger.cart_info(catalog);
   let announce = if info.positions == 0 {
      String::from("Cart is empty")
   } else {
      format!("In cart {} pos., {} pcs. for total cost {}",
         info.positions, info.items_num, env::price_with_unit(info.total_cost))
   };

   let text = format!("🍔 Foods · {}\n{}\n{}", state.category, items, announce);
   surface.show_with_markup(&text, &markup(catalog));
   Ok(())
}

pub async fn update(surface: &Surface, dialogue: &mut Dialogue, mut state: FoodsState, input: &str) -> HandlerResult {
   let catalog = catalog::catalog();

   // Parse and handle commands
   let cmd = Command::parse(input, catalog);
   match cmd {
      Command::Category(category) => {
         state.category = category;
         dialogue.update(state.to_owned());
         view(surface, &state).await
      }

      Command::Inc(item_id) => {
         state.ledger.add(&item_id, catalog);
         dialogue.update(state.to_owned());
         view(surface, &state).await
      }

      Command::Dec(item_id) => {
         state.ledger.remove(&item_id);
         dialogue.update(state.to_owned());
         view(surface, &state).await
      }

      Command::Checkout => {
         if state.ledger.is_empty() {
            surface.show("Cart is empty");
         } else {
            // Snapshot the ledger into a pending order and start over
            let id = format!("ORD-{:03}", order::orders().len() + 1);
            let order = Order::from_ledger(&id, &state.ledger, catalog, env::current_date_time());
            surface.show(&receipt_text(&order));
            state.ledger.clear();
            dialogue.update(state.to_owned());
         }
         view(surface, &state).await
      }

      // Tab switching and everything else
      Command::Unknown => dashboard::update(surface, dialogue, state.prev_state, input).await,
   }
}

fn receipt_text(order: &Order) -> String {
   let items = order.lines.iter()
   .fold(String::default(), |acc, line| {
      format!("{}\n{}: {} x {} pcs. = {}",
         acc, line.title, env::price_with_unit(line.price), line.amount,
         env::price_with_unit(line.cost()))
   });

   format!("Order {} accepted{}\nTotal {}", order.id, items, env::price_with_unit(order.total))
}

fn markup(catalog: &Catalog) -> Markup {
   let categories = catalog.categories()
   .iter()
   .map(|category| String::from(*category))
   .collect();

   let keyboard = vec![categories, vec![String::from(CHECKOUT)], dashboard::tab_row()];
   kb_markup(keyboard)
}
