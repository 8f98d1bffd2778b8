pub mod message_log;
pub mod visit_log;

pub use message_log::MessageLog;
pub use visit_log::VisitLog;
