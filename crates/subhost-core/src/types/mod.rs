//! Report data types.

mod hostname;
mod record;

pub use hostname::*;
pub use record::*;
