/* ===============================================================================
Food ordering app.
Rendering surface, a plain terminal console. 18 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

// Rows of buttons below the screen text. The user "taps" a button by
// typing its caption
pub struct Markup {
   rows: Vec<Vec<String>>,
}

impl Markup {
   pub fn new(rows: Vec<Vec<String>>) -> Self {
      Self { rows }
   }
}

// The app core only sends to the surface and never reads anything back,
// taps arrive through the event channel
pub struct Surface;

impl Surface {
   pub fn new() -> Self {
      Self
   }

   pub fn show(&self, text: &str) {
      println!();
      println!("{}", text);
   }

   pub fn show_with_markup(&self, text: &str, markup: &Markup) {
      self.show(text);
      for row in &markup.rows {
         let line = row.iter()
         .fold(String::new(), |acc, caption| format!("{}[ {} ] ", acc, caption));
         println!("{}", line.trim_end());
      }
   }
}
