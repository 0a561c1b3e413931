//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. Input (keyboard editing, shortcut -> NoteCommand)
//! 2. Io (command handling, auto-reload poll)
//! 3. Present (UI text refresh)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct NoteInputSet; // editor buffer edits and command emission

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct NoteIoSet; // all file access happens here

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct NotePresentSet; // reads store state, writes UI text
