mod apply_draft_edit;
mod clear_skills;
mod close_panel;
mod load_draft;
mod rename_skill;
mod save_draft;
mod unlock;

pub use apply_draft_edit::apply_draft_edit_handler;
pub use clear_skills::clear_skills_handler;
pub use close_panel::close_panel_handler;
pub use load_draft::load_draft_handler;
pub use rename_skill::rename_skill_handler;
pub use save_draft::save_draft_handler;
pub use unlock::unlock_panel_handler;
