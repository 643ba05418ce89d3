//! Generation domain module - turns a service description into a client module
//!
//! The pipeline is synchronous and runs in three stages: shapes are resolved
//! into a type model, operations are compiled against that model, and the
//! result is rendered through a template. Loading the description and
//! writing the output are handled by infrastructure collaborators.

pub mod context;
pub mod diagnostics;
pub mod errors;
pub mod operations;
pub mod orchestrator;
pub mod shapes;
pub mod traits;
pub mod type_mapper;
pub mod types;
pub mod utils;

pub use context::*;
pub use diagnostics::*;
pub use errors::*;
pub use operations::*;
pub use orchestrator::*;
pub use shapes::*;
pub use traits::*;
pub use type_mapper::{BUILTIN_TYPES, map_primitive};
pub use types::*;
pub use utils::normalize;
