#![doc = include_str!("../README.md")]

/// Badge formats and markers.
pub mod badge;
/// Command implementations and argument types.
pub mod commands;
/// README scanning and rewriting.
pub mod readme;
/// Repository name helpers.
pub mod repo;
