//! Infrastructure layer - concrete implementations of domain ports

pub mod generation;
pub mod output;
pub mod service;
pub mod shell;
pub mod templates;

pub use shell::*;
pub use templates::*;
