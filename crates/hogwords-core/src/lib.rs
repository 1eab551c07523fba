//! # hogwords-core
//!
//! Core types, configuration, and error handling for the Hogwords front end:
//! the persisted session store, role resolution, and the role-aware layout
//! shell decisions built on top of it.

pub mod config;
pub mod error;
pub mod layout;
pub mod session;
