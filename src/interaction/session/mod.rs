pub mod note_hot_reload;
pub mod note_session;
