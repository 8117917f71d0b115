/* ===============================================================================
Food ordering app.
Order as a finalized purchase record. 16 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use chrono::{NaiveDate, NaiveDateTime,};
use once_cell::sync::{OnceCell};
use strum::{AsRefStr, EnumString, EnumMessage, EnumIter,};

use crate::cart::CartLedger;
use crate::catalog::Catalog;

// Orders of the user, load once at startup
pub static ORDERS: OnceCell<Vec<Order>> = OnceCell::new();

// Closed set of statuses, no custom ones
#[derive(Copy, Clone, Debug, PartialEq, Eq, AsRefStr, EnumString, EnumMessage, EnumIter)]
pub enum Status {
   #[strum(to_string = "pending", message = "Pending")]
   Pending,
   #[strum(to_string = "processing", message = "Processing")]
   Processing,
   #[strum(to_string = "completed", message = "Completed")]
   Completed,
   #[strum(to_string = "delivered", message = "Delivered")]
   Delivered,
   #[strum(to_string = "cancelled", message = "Cancelled")]
   Cancelled,
}

// Line snapshot, not a catalog reference - the record must survive
// catalog changes untouched
#[derive(Clone, Debug)]
pub struct OrderLine {
   pub item_id: String,
   pub title: String,
   pub price: usize, // unit price in cents
   pub amount: usize,
}

impl OrderLine {
   pub fn cost(&self) -> usize {
      self.price * self.amount
   }
}

#[derive(Clone, Debug)]
pub struct Order {
   pub id: String,
   pub created: NaiveDateTime,
   pub status: Status,
   pub total: usize, // in cents
   pub lines: Vec<OrderLine>,
}

impl Order {
   pub fn new(id: &str, created: NaiveDateTime, status: Status, lines: Vec<OrderLine>) -> Self {
      let total = lines.iter().fold(0, |acc, line| acc + line.cost());
      Self {
         id: String::from(id),
         created,
         status,
         total,
         lines,
      }
   }

   // Snapshot of the ledger at checkout time, always pending
   pub fn from_ledger(id: &str, ledger: &CartLedger, catalog: &Catalog, created: NaiveDateTime) -> Self {
      let lines = ledger.entries(catalog)
      .iter()
      .filter_map(|(item_id, amount)| {
         catalog.find(item_id)
         .map(|item| OrderLine {
            item_id: item.id.clone(),
            title: item.title.clone(),
            price: item.price,
            amount: *amount,
         })
      })
      .collect();

      Self::new(id, created, Status::Pending, lines)
   }
}

fn line(item_id: &str, title: &str, price: usize, amount: usize) -> OrderLine {
   OrderLine {
      item_id: String::from(item_id),
      title: String::from(title),
      price,
      amount,
   }
}

fn date(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
   NaiveDate::from_ymd_opt(y, m, d)
   .and_then(|date| date.and_hms_opt(h, min, 0))
   .unwrap_or_default()
}

// Fixed order history instead of a data-fetch from backend
pub fn seed() -> Vec<Order> {
   vec![
      Order::new("ORD-001", date(2023, 3, 2, 18, 40), Status::Delivered, vec![
         line("1", "Classic Burger", 899, 2),
         line("4", "French Fries", 499, 1),
      ]),
      Order::new("ORD-002", date(2023, 3, 5, 12, 15), Status::Completed, vec![
         line("2", "Pepperoni Pizza", 1_299, 1),
         line("5", "Chocolate Shake", 599, 2),
      ]),
      Order::new("ORD-003", date(2023, 3, 9, 20, 5), Status::Processing, vec![
         line("3", "California Roll", 1_099, 1),
      ]),
      Order::new("ORD-004", date(2023, 3, 11, 13, 30), Status::Pending, vec![
         line("6", "Caesar Salad", 799, 1),
         line("5", "Chocolate Shake", 599, 1),
      ]),
      Order::new("ORD-005", date(2023, 3, 11, 19, 55), Status::Cancelled, vec![
         line("1", "Classic Burger", 899, 1),
      ]),
   ]
}

// The order history itself, panics if accessed before seeding in main()
pub fn orders() -> &'static Vec<Order> {
   ORDERS.get().unwrap()
}
