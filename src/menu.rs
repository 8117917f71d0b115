/* ===============================================================================
Food ordering app.
Menu item. 12 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::environment as env;

// Catalog entry, created once at startup and never mutated
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
   pub id: String,
   pub title: String,
   pub descr: String,
   pub category: String,
   pub price: usize, // in cents
   pub rating: f32, // 0.0-5.0
}

impl MenuItem {
   pub fn new(id: &str, title: &str, descr: &str, category: &str, price: usize, rating: f32) -> Self {
      Self {
         id: String::from(id),
         title: String::from(title),
         descr: String::from(descr),
         category: String::from(category),
         price,
         rating,
      }
   }

   pub fn title_with_price(&self) -> String {
      format!("{} {}", self.title, env::price_with_unit(self.price))
   }
}
