pub mod apply_draft_edit;
pub mod clear_skills;
pub mod load_draft;
pub mod rename_skill;
pub mod save_draft;
pub mod unlock_panel;
