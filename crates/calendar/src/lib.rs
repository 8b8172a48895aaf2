//! # lukashian-calendar
//!
//! Instants and their year, day and beeps in a fixed-length calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Clock"] -->|".now()"| B["Instant"]
//!     U["Unix ms"] -->|"Instant::from_unix_epoch_milliseconds()"| B
//!     B -->|".decompose()"| C["Decomposition"]
//!     C -->|".year()"| D["Year"]
//!     C -->|".day()"| E["Day"]
//!     C -->|".beeps()"| F["u16"]
//!     B -->|"format()"| G["\"1203 011-5926\""]
//!     G -->|"parse()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use lukashian_calendar::{format, Clock, FixedClock, Instant};
//!
//! let clock = FixedClock::new(Instant::from_epoch_milliseconds(0).unwrap());
//! let now = clock.now().unwrap();
//!
//! assert_eq!(now.year().number(), 1);
//! assert_eq!(now.day().number(), 1);
//! assert_eq!(now.beeps(), 0);
//! assert_eq!(format(now), "0000 001-1");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `constants` | Calendar shape and epoch constants |
//! | `epoch` | Unix <-> calendar-epoch millisecond conversion |
//! | `clock` | Current-moment sources |
//! | `instant` | Immutable point in time |
//! | `decompose` | Milliseconds <-> (year, day, beeps) |
//! | `year` | Year newtype |
//! | `day` | Day with year context |
//! | `format` | Canonical text form |
//! | `error` | Error types |

pub mod constants;
pub mod epoch;

mod clock;
mod day;
mod decompose;
mod error;
mod format;
mod instant;
mod year;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day::Day;
pub use decompose::{compose, decompose, Decomposition};
pub use error::CalendarError;
pub use format::{format, format_parts, parse};
pub use instant::Instant;
pub use year::Year;
