mod clear_messages;
mod clear_visits;
mod get_messages;
mod get_visits;
mod log_visit;
mod submit_message;

pub use clear_messages::clear_messages_handler;
pub use clear_visits::clear_visits_handler;
pub use get_messages::get_messages_handler;
pub use get_visits::get_visits_handler;
pub use log_visit::log_visit_handler;
pub use submit_message::submit_message_handler;
