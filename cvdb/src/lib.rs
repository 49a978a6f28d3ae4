//! Converting the open cloud vulnerability database into CSV
//!
//! ## Idea
//!
//! The database is a git repository holding one YAML document per advisory. Converting it is a
//! strictly sequential pipeline:
//!
//! * a [`source::Fetcher`] populates a working directory (e.g. [`source::GitFetcher`]),
//! * the [`walker::Walker`] enumerates all advisory files below it,
//! * the [`parse::AdvisoryParser`] decodes each of them into a [`model::Vulnerability`] and
//!   derives its [`links::Links`],
//! * the [`output`] module renders the records as CSV.
//!
//! The [`lifecycle::Lifecycle`] drives all of that and takes care of the working directory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cvdb_walker::lifecycle::{Lifecycle, Options};
//! use cvdb_walker::source::GitFetcher;
//!
//! fn convert() -> Result<(), cvdb_walker::lifecycle::Error> {
//!     let outcome = Lifecycle::new(Options::default(), GitFetcher).run()?;
//!     log::info!("Wrote {} records to {}", outcome.records, outcome.output.display());
//!     Ok(())
//! }
//! ```

pub mod lifecycle;
pub mod links;
pub mod model;
pub mod output;
pub mod parse;
pub mod source;
pub mod walker;
