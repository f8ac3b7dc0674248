pub mod context;
pub mod models;
pub mod session;

pub use context::build_context;
pub use models::{Message, MessageLog, Role};
pub use session::{Session, SessionBuilder, SessionEvent};
