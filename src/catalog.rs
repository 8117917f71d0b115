/* ===============================================================================
Food ordering app.
Static menu catalog. 14 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use once_cell::sync::{OnceCell};

use crate::menu::MenuItem;

// Menu items of the app, load once at startup
pub static CATALOG: OnceCell<Catalog> = OnceCell::new();

// Pseudo-category to display the whole catalog
pub const ALL_CATEGORIES: &str = "All";

pub struct Catalog {
   data: Vec<MenuItem>,
}

impl Catalog {
   pub fn new(data: Vec<MenuItem>) -> Self {
      Self { data }
   }

   // Fixed in-memory catalog instead of a data-fetch from backend
   pub fn seed() -> Self {
      let data = vec![
         MenuItem::new("1", "Classic Burger", "Beef patty, cheddar, lettuce and our signature sauce", "Burgers", 899, 4.5),
         MenuItem::new("2", "Pepperoni Pizza", "Stone-baked, double pepperoni and mozzarella", "Pizza", 1_299, 4.7),
         MenuItem::new("3", "California Roll", "Crab, avocado and cucumber, 8 pcs", "Sushi", 1_099, 4.3),
         MenuItem::new("4", "French Fries", "Crispy golden fries with sea salt", "Snacks", 499, 4.2),
         MenuItem::new("5", "Chocolate Shake", "Thick shake with whipped cream", "Drinks", 599, 4.8),
         MenuItem::new("6", "Caesar Salad", "Romaine, parmesan, croutons and caesar dressing", "Salads", 799, 4.1),
      ];
      Self::new(data)
   }

   pub fn find(&self, item_id: &str) -> Option<&MenuItem> {
      self.data.iter().find(|item| item.id == item_id)
   }

   // Items of the category in the catalog order, the whole catalog for "All".
   // Matching is case-sensitive and exact
   pub fn filter_by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> {
      self.data.iter()
      .filter(move |item| category == ALL_CATEGORIES || item.category == category)
   }

   // Distinct category labels in the catalog order, prepended with "All"
   pub fn categories(&self) -> Vec<&str> {
      let mut res = vec![ALL_CATEGORIES];
      for item in &self.data {
         if !res.contains(&item.category.as_str()) {
            res.push(item.category.as_str());
         }
      }
      res
   }
}

// The catalog itself, panics if accessed before seeding in main()
pub fn catalog() -> &'static Catalog {
   CATALOG.get().unwrap()
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn find_resolves_known_id() {
      let catalog = Catalog::seed();
      let item = catalog.find("4").unwrap();
      assert_eq!(item.title, "French Fries");
      assert_eq!(item.price, 499);
   }

   #[test]
   fn find_unknown_id_is_none() {
      let catalog = Catalog::seed();
      assert!(catalog.find("42").is_none());
   }

   #[test]
   fn filter_by_category_exact_match() {
      let catalog = Catalog::seed();
      let found: Vec<_> = catalog.filter_by_category("Pizza").collect();
      assert_eq!(found.len(), 1);
      assert_eq!(found[0].id, "2");
   }

   #[test]
   fn filter_is_case_sensitive() {
      let catalog = Catalog::seed();
      assert_eq!(catalog.filter_by_category("pizza").count(), 0);
   }

   #[test]
   fn filter_all_preserves_order() {
      let catalog = Catalog::seed();
      let ids: Vec<_> = catalog.filter_by_category(ALL_CATEGORIES)
      .map(|item| item.id.as_str())
      .collect();
      assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
   }

   #[test]
   fn categories_distinct_with_all_first() {
      let catalog = Catalog::seed();
      let res = catalog.categories();
      assert_eq!(res[0], ALL_CATEGORIES);
      assert_eq!(res.len(), 7); // "All" plus six distinct labels
   }
}
