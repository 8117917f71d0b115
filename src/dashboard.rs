/* ===============================================================================
Food ordering app.
Dashboard tab bar, shared by its screens. 20 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::str::FromStr;
use strum::{AsRefStr, EnumString,};

use crate::foods;
use crate::history;
use crate::profile;
use crate::settings;
use crate::states::{Dialogue, HandlerResult, MainState, kb_markup,};
use crate::surface::{Markup, Surface,};

// Dashboard tabs
#[derive(AsRefStr, EnumString)]
enum Tab {
   #[strum(to_string = "🍔 Foods")]
   Foods,
   #[strum(to_string = "🧾 Orders")]
   Orders,
   #[strum(to_string = "👤 Profile")]
   Profile,
   #[strum(to_string = "⚙ Settings")]
   Settings,
}

// The tab bar as a row of captions, screens append it to their markup
pub fn tab_row() -> Vec<String> {
   vec![
      String::from(Tab::Foods.as_ref()),
      String::from(Tab::Orders.as_ref()),
      String::from(Tab::Profile.as_ref()),
      String::from(Tab::Settings.as_ref()),
   ]
}

pub fn tab_markup() -> Markup {
   kb_markup(vec![tab_row()])
}

// Fallback for taps the active tab did not recognize: tab switching,
// anything else is reported back
pub async fn update(surface: &Surface, dialogue: &mut Dialogue, state: MainState, input: &str) -> HandlerResult {
   let tab = Tab::from_str(input);
   match tab {
      Ok(Tab::Foods) => foods::enter(surface, dialogue, state).await,
      Ok(Tab::Orders) => history::enter(surface, dialogue, state).await,
      Ok(Tab::Profile) => profile::enter(surface, dialogue, state).await,
      Ok(Tab::Settings) => settings::enter(surface, dialogue, state).await,

      Err(_) => {
         surface.show_with_markup("Unknown command, use the buttons below", &tab_markup());
         Ok(())
      }
   }
}
