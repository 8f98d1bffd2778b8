mod get_content;
mod get_skills;

pub use get_content::get_content_handler;
pub use get_skills::get_skills_handler;
