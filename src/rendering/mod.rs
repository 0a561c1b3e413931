pub mod note_ui;
