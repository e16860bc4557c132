// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Freight Rate Table Extraction
//!
//! Pulls rate tables out of HTML email bodies and turns them into typed,
//! canonical records.
//!
//! # Pipeline
//!
//! - Top-level tables are located and swapped for placeholder tokens
//! - The quoted thread is split on reply header blocks (English and Russian)
//! - Only tables of the newest message are converted to grids
//! - Grids whose headers match the alias vocabulary are remapped to
//!   `service` / `entry` / `rate`
//! - Cells are cleaned into numbers and canonical service names; one table
//!   that cannot be normalized suppresses every table of the email
//!
//! # Example
//!
//! ```rust
//! use rate_extract::{Vocabulary, extract_rate_tables};
//!
//! let html = "<table>\
//!     <tr><td>Услуга</td><td>Вход</td><td>Ставка</td></tr>\
//!     <tr><td>Фрахт</td><td>100</td><td>40000 руб</td></tr>\
//!     </table>";
//! let result = extract_rate_tables(html, Vocabulary::builtin()).unwrap();
//!
//! let record = result.records().next().unwrap();
//! assert_eq!(record.service, "Фрахт");
//! assert_eq!(record.entry, Some(100.0));
//! assert_eq!(record.rate, 40000.0);
//! ```

mod error;
mod extracted;
mod normalize;
mod parser;
mod placeholder;
mod schema;
mod table;
mod thread;
mod types;
mod vocabulary;

pub mod export;

pub use error::{ExtractError, Result};
pub use extracted::*;
pub use normalize::*;
pub use parser::parse_email;
pub use placeholder::*;
pub use schema::*;
pub use table::*;
pub use thread::*;
pub use types::*;
pub use vocabulary::*;
