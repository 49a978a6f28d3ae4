//! Data model of the database

mod vulnerability;

pub use vulnerability::*;
