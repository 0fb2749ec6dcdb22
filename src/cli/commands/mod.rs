//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod book;
pub mod cancel;
pub mod delete;
pub mod init;
pub mod list;
pub mod reschedule;
pub mod validate;
