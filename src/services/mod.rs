//! External service clients.

pub mod tvmaze;
