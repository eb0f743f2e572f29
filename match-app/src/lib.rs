mod action;
mod context;
mod session;
mod source;

pub use action::UserAction;
pub use context::AppContext;
pub use session::{Session, SessionRegistry};
pub use source::ProfileSource;
