mod entry;
mod queue;
mod registry;

pub use entry::{ActivityEntry, TIME_FORMAT};
pub use queue::{ActivityLog, HISTORY_CAPACITY};
pub use registry::ActivityRegistry;
