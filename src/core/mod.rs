//! Core business logic modules.

pub mod episode;
pub mod localpath;
pub mod movie;
pub mod renamer;
pub mod sanitizer;
pub mod scanner;
pub mod title;
