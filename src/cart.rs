/* ===============================================================================
Food ordering app.
Cart ledger of the ordering session. 14 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::collections::HashMap;

use crate::catalog::Catalog;

// Totals over the ledger for the cart summary line
pub struct CartInfo {
   pub positions: usize,
   pub items_num: usize,
   pub total_cost: usize,
}

// Selected items of the active ordering session. Entries hold positive
// amounts only, an amount that would drop to zero removes the entry
#[derive(Clone, Default)]
pub struct CartLedger {
   data: HashMap<String, usize>,
}

impl CartLedger {
   pub fn new() -> Self {
      Self {
         data: HashMap::new(),
      }
   }

   // Plus one item, ignores identifiers unknown to the catalog
   pub fn add(&mut self, item_id: &str, catalog: &Catalog) {
      if catalog.find(item_id).is_none() {
         return;
      }
      *self.data.entry(String::from(item_id)).or_insert(0) += 1;
   }

   // Minus one item, the last one removes the entry, absent is a no-op
   pub fn remove(&mut self, item_id: &str) {
      if let Some(amount) = self.data.get_mut(item_id) {
         if *amount > 1 {
            *amount -= 1;
         } else {
            self.data.remove(item_id);
         }
      }
   }

   pub fn clear(&mut self) {
      self.data.clear();
   }

   pub fn is_empty(&self) -> bool {
      self.data.is_empty()
   }

   // Amount of the item or zero
   pub fn amount(&self, item_id: &str) -> usize {
      self.data.get(item_id).copied().unwrap_or_default()
   }

   pub fn total_item_count(&self) -> usize {
      self.data.values().sum()
   }

   // Items no longer resolvable in the catalog cost nothing
   pub fn total_price(&self, catalog: &Catalog) -> usize {
      self.data.iter()
      .map(|(id, amount)| {
         let price = catalog.find(id).map(|item| item.price).unwrap_or_default();
         price * amount
      })
      .sum()
   }

   pub fn cart_info(&self, catalog: &Catalog) -> CartInfo {
      CartInfo {
         positions: self.data.len(),
         items_num: self.total_item_count(),
         total_cost: self.total_price(catalog),
      }
   }

   // Entries as (id, amount) in the catalog order for display and snapshots
   pub fn entries<'a>(&'a self, catalog: &'a Catalog) -> Vec<(&'a str, usize)> {
      catalog.filter_by_category(crate::catalog::ALL_CATEGORIES)
      .filter_map(|item| {
         let amount = self.amount(&item.id);
         if amount > 0 { Some((item.id.as_str(), amount)) } else { None }
      })
      .collect()
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::catalog::Catalog;

   #[test]
   fn add_and_count() {
      let catalog = Catalog::seed();
      let mut ledger = CartLedger::new();
      assert_eq!(ledger.total_item_count(), 0);

      ledger.add("1", &catalog);
      ledger.add("1", &catalog);
      ledger.add("4", &catalog);
      assert_eq!(ledger.amount("1"), 2);
      assert_eq!(ledger.amount("4"), 1);
      assert_eq!(ledger.total_item_count(), 3);
   }

   #[test]
   fn add_unknown_id_is_noop() {
      let catalog = Catalog::seed();
      let mut ledger = CartLedger::new();
      ledger.add("42", &catalog);
      assert!(ledger.is_empty());
      assert_eq!(ledger.total_item_count(), 0);
   }

   #[test]
   fn remove_deletes_entry_at_one() {
      let catalog = Catalog::seed();
      let mut ledger = CartLedger::new();
      ledger.add("1", &catalog);
      ledger.add("1", &catalog);

      ledger.remove("1");
      assert_eq!(ledger.amount("1"), 1);

      // The last one removes the entry, no zero-but-present amounts
      ledger.remove("1");
      assert_eq!(ledger.amount("1"), 0);
      assert!(ledger.is_empty());

      // Idempotent past removal
      ledger.remove("1");
      assert!(ledger.is_empty());
   }

   #[test]
   fn total_price_over_catalog() {
      let catalog = Catalog::seed();
      let mut ledger = CartLedger::new();
      ledger.add("1", &catalog); // 8.99
      ledger.add("1", &catalog);
      ledger.add("1", &catalog);
      ledger.add("4", &catalog); // 4.99

      // 3 x 8.99 + 4.99 = 31.96
      assert_eq!(ledger.total_price(&catalog), 3_196);
   }

   #[test]
   fn stale_entry_costs_nothing() {
      let catalog = Catalog::seed();
      let mut ledger = CartLedger::new();
      ledger.add("1", &catalog);

      // The same selection priced against a shrunken catalog
      let shrunken = Catalog::new(vec![]);
      assert_eq!(ledger.total_price(&shrunken), 0);
      assert_eq!(ledger.total_item_count(), 1);
   }

   #[test]
   fn cart_info_totals() {
      let catalog = Catalog::seed();
      let mut ledger = CartLedger::new();
      ledger.add("2", &catalog); // 12.99
      ledger.add("2", &catalog);
      ledger.add("5", &catalog); // 5.99

      let info = ledger.cart_info(&catalog);
      assert_eq!(info.positions, 2);
      assert_eq!(info.items_num, 3);
      assert_eq!(info.total_cost, 2 * 1_299 + 599);
   }

   #[test]
   fn clear_empties_unconditionally() {
      let catalog = Catalog::seed();
      let mut ledger = CartLedger::new();
      ledger.add("1", &catalog);
      ledger.add("6", &catalog);
      ledger.clear();
      assert!(ledger.is_empty());
      assert_eq!(ledger.total_price(&catalog), 0);
   }

   #[test]
   fn entries_in_catalog_order() {
      let catalog = Catalog::seed();
      let mut ledger = CartLedger::new();
      ledger.add("5", &catalog);
      ledger.add("1", &catalog);
      ledger.add("5", &catalog);

      let entries = ledger.entries(&catalog);
      assert_eq!(entries, vec![("1", 1), ("5", 2)]);
   }
}
