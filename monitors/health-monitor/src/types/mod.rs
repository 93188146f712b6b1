//! Plain data types produced by the readers

mod load;
mod memory;
mod snapshot;
mod storage;

pub use load::*;
pub use memory::*;
pub use snapshot::*;
pub use storage::*;
