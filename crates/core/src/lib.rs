#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod time;

pub use catalog::{Catalog, CatalogError};
pub use time::{Clock, Countdown, DEFAULT_QUIZ_SECONDS};
