mod catalog;
mod criteria;
mod engine;
mod record;

pub use catalog::{job_categories, job_types};
pub use criteria::{FilterCriterion, FilterQuery};
pub use engine::{FilterEngine, ProfileMap};
pub use record::{ProfileRecord, DATE_FORMAT};
