//! Shared configuration, constants and errors for the vdir workspace.

pub mod config;
pub mod constants;
pub mod error;
