//! Quill Core Library
//!
//! Content store, rankers and blog operations for the quill blog engine.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod logging;
pub mod pagination;
pub mod post;
pub mod ranking;
pub mod share;
pub mod site;
pub mod text;
pub mod validation;
