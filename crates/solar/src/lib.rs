//! # lukashian-solar
//!
//! The astronomical form of the Lukashian calendar: years end at the
//! December solstice and days are true solar days.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["solstice_jde_ms()"] --> C["SolarCalendar::new()"]
//!     B["perihelion_jde_ms()"] --> C
//!     D["mean_solar_day_nanos()"] --> C
//!     E["equation_of_time_ms()"] --> C
//!     F["Instant"] -->|".date()"| G["SolarDate"]
//!     C --> G
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use lukashian_calendar::Instant;
//! use lukashian_solar::SolarCalendar;
//!
//! let calendar = SolarCalendar::new(5920, 5930).unwrap();
//! let instant = Instant::from_unix_epoch_milliseconds(1_767_225_600_000).unwrap();
//! let date = calendar.date(instant).unwrap();
//! assert_eq!((date.year(), date.day()), (5926, 11));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `astro` | Solstice, perihelion, mean day length, equation of time |
//! | `calendar` | Precomputed year and day boundaries |
//! | `date` | Year, day and beeps of a moment |
//! | `error` | Error types |

pub mod astro;

mod calendar;
mod date;
mod error;

pub use calendar::SolarCalendar;
pub use date::SolarDate;
pub use error::SolarError;
