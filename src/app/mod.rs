pub mod note_app;
