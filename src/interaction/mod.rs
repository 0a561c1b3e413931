pub mod editor;
pub mod session;
