//! Service description loading implementations

pub mod composite_loader;
pub mod file_loader;
pub mod http_loader;
pub mod parser;

pub use composite_loader::CompositeServiceLoader;
pub use file_loader::FileServiceLoader;
pub use http_loader::HttpServiceLoader;
pub use parser::{DocumentFormat, parse_service_description};
