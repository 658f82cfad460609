pub mod backend;
pub mod config;

pub use backend::{Backend, BackendDependencies};
pub use config::{resolve_data_directory, TailorConfig};
