//! # riverflow-calendar
//!
//! Calendar helpers shared by the loader and the analyses.
//!
//! ## Quick Start
//!
//! ```
//! use riverflow_calendar::{Season, month_name, parse_day_first};
//!
//! let date = parse_day_first("15/07/2019").unwrap();
//! assert_eq!(date.to_string(), "2019-07-15");
//! assert_eq!(Season::from_month(7).unwrap(), Season::Summer);
//! assert_eq!(month_name(7).unwrap(), "July");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `parse` | Day-first date parsing |
//! | `season` | Meteorological season of a month |
//! | `month` | Month names, numeric date encoding |
//! | `error` | Error types |

mod error;
mod month;
mod parse;
mod season;

pub use error::CalendarError;
pub use month::{date_to_num, month_name};
pub use parse::parse_day_first;
pub use season::Season;
