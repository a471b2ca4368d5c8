mod distance;
mod position_store;
mod report;
mod snapshot_index;
mod tracker;
mod tugging;

pub use distance::*;
pub use position_store::*;
pub use report::*;
pub use snapshot_index::*;
pub use tracker::*;
pub use tugging::*;
