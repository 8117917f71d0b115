/* ===============================================================================
Food ordering app.
Global vars from environment. 12 Mar 2023.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2023 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use chrono::{FixedOffset, NaiveDateTime, Utc,};
use once_cell::sync::{OnceCell};
use std::{env, time::Duration,};

// Settings
pub static VARS: OnceCell<Vars> = OnceCell::new();

// Default delay of the simulated backend call, ms
const DEF_AUTH_DELAY: u64 = 1_500;

// Enviroment variables
pub struct Vars {
   // Price suffix
   price_unit: String,

   // Simulated backend call delay, ms
   auth_delay: u64,

   // Time zone, UTC
   time_zone: FixedOffset,
}

impl Vars {
   pub fn from_env() -> Self {
      Vars {
         // Price suffix
         price_unit: {
            match env::var("PRICE_UNIT") {
               Ok(s) => s,
               Err(e) => {
                  log::info!("Something wrong with PRICE_UNIT: {}", e);
                  String::from("$")
               }
            }
         },

         // Simulated backend call delay, ms
         auth_delay: {
            match env::var("AUTH_DELAY_MS") {
               Ok(s) => match s.parse::<u64>() {
                     Ok(n) => n,
                     Err(e) => {
                        log::info!("Something wrong with AUTH_DELAY_MS: {}", e);
                        DEF_AUTH_DELAY
                     }
               }
               Err(_) => DEF_AUTH_DELAY // if the variable is not set, that's ok
            }
         },

         // Time zone, UTC
         time_zone: {
            match env::var("TIME_ZONE") {
               Ok(s) => match s.parse::<i32>() {
                     Ok(n) => FixedOffset::east_opt(n * 3600).unwrap_or_else(|| FixedOffset::east_opt(0).unwrap()),
                     Err(e) => {
                        log::info!("Something wrong with TIME_ZONE: {}", e);
                        FixedOffset::east_opt(0).unwrap()
                     }
               }
               Err(_) => FixedOffset::east_opt(0).unwrap()
            }
         },
      }
   }
}

// Current local time
pub fn current_date_time() -> NaiveDateTime {
   let our_timezone = VARS.get().unwrap().time_zone;
   Utc::now().with_timezone(&our_timezone).naive_local()
}

// String with info about time zone
pub fn time_zone_info() -> String {
   let our_timezone = VARS.get().unwrap().time_zone.local_minus_utc() / 3600;
   if our_timezone > 0 {
      format!("UTC+{}", our_timezone)
   } else {
      format!("UTC{}", our_timezone)
   }
}

// Delay of the simulated backend call
pub fn auth_delay() -> Duration {
   Duration::from_millis(VARS.get().unwrap().auth_delay)
}

// Price with units, prices are stored in cents
pub fn price_with_unit(price: usize) -> String {
   format!("{}.{:02}{}", price / 100, price % 100, VARS.get().unwrap().price_unit)
}
