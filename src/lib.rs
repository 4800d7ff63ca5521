//! Renamer Library
//!
//! Normalizes TV episode and movie filenames into a canonical, sanitized
//! naming scheme, optionally enriched with episode names from TVmaze.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod services;

pub use crate::core::episode::parse_episode;
pub use crate::core::localpath::{EpisodeFile, LocalPath, MovieFile};
pub use crate::core::movie::parse_movie;
pub use crate::core::sanitizer::sanitize;
pub use crate::core::title::format_name;
pub use error::{Error, Result};
