pub mod clear_recruiter_visits;
pub mod clear_visitor_messages;
pub mod fetch_recruiter_visits;
pub mod fetch_visitor_messages;
pub mod log_recruiter_visit;
pub mod submit_visitor_message;
