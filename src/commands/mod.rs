//! Command implementations for quill

pub mod comment;
pub mod dispatch;
pub mod format;
pub mod init;
pub mod list;
pub mod post;
pub mod search;
pub mod share;
pub mod show;
pub mod similar;
pub mod tags;
pub mod user;
