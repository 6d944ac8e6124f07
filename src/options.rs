//! The CLI surface.

pub mod args;
