//! svcgen - typed client generation from JSON service descriptions
//!
//! A service description enumerates data shapes and remote operations. The
//! generator resolves the shapes into a deduplicated type model, compiles each
//! operation against it, and renders the result through a template into a
//! single client module.
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod generation;
pub mod infrastructure;
