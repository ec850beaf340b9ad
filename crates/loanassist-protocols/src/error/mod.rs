//! Error types for the loanassist protocol layer.

mod embed;
mod fuse;
mod index;
mod record;
mod store;

pub use embed::*;
pub use fuse::*;
pub use index::*;
pub use record::*;
pub use store::*;
