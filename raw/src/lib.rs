//! # raw
//!
//! Primitive field types for compact, fixed-layout records.
//!
//! A record declared with these types (and plain scalars) has a fixed-size
//! body whose byte layout is computed by `rawgen`. String fields store only a
//! small descriptor in that body; their bytes live in a trailing region of the
//! same buffer.
//!
//! ```rust
//! let mut b = vec![0u8; 8];
//! let mut name = raw::String::default();
//! name.encode("gopher", &mut b).unwrap();
//!
//! assert_eq!(b.len(), 14);
//! assert_eq!(name.string(raw::window(&b)).unwrap(), "gopher");
//! ```

pub mod error;
mod fixed;
mod string;
mod time;

pub use chrono;

pub use error::Error;
pub use fixed::Fixed;
pub use string::String;
pub use time::{Duration, Time};

/// Largest byte span a string descriptor can address, counted from the start
/// of the record buffer.
pub const MAX_WINDOW: usize = 0xFFFF;

/// Returns the addressable window over a record buffer.
pub fn window(b: &[u8]) -> &[u8] {
    &b[..b.len().min(MAX_WINDOW)]
}

/// Fails with [`Error::ShortBuffer`] unless `b` holds at least `size` bytes.
pub fn check_len(b: &[u8], size: usize) -> Result<(), Error> {
    if b.len() < size {
        return Err(Error::ShortBuffer {
            need: size,
            got: b.len(),
        });
    }
    Ok(())
}
