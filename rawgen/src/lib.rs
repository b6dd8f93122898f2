//! # rawgen
//!
//! Source-to-source generator for raw records.
//!
//! A raw record is a private struct whose fields are all drawn from a closed
//! set of primitive types (`bool`, fixed-width integers, `f32`/`f64`, and the
//! `raw::Time`, `raw::Duration` and `raw::String` types). For every raw
//! record in a file that imports the `raw` crate, rawgen appends an exported
//! twin with `encode`/`decode` methods plus per-field accessors on the raw
//! record, inside a single marker-delimited block at the end of the file.
//!
//! The block is thrown away and rebuilt on every run, so running the
//! generator repeatedly over its own output is a no-op.
//!
//! ```rust,no_run
//! use rawgen::{Config, Generator};
//!
//! let generator = Generator::new(Config::default())?;
//! generator.run(std::path::Path::new("src"), |path, _| {
//!     println!("OK {}", path.display());
//! })?;
//! # Ok::<(), rawgen::Error>(())
//! ```

pub mod block;
pub mod classify;
pub mod config;
pub mod driver;
pub mod emit;
pub mod error;
pub mod plan;
pub mod types;
pub mod walk;

pub use classify::{classify, Eligibility, Reason};
pub use config::Config;
pub use driver::{Generator, Outcome, Regenerated};
pub use emit::emit;
pub use error::{Error, Result};
pub use plan::{plan, FieldPlan, GenerationPlan};
pub use types::{RawType, Strategy, TypeInfo};
