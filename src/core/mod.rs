//! Core functionality: the document abstraction, errors, and configuration

pub mod config;
pub mod document;
pub mod error;
