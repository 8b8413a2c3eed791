pub mod config;
pub mod constants;
pub mod scene;
pub mod types;

pub use config::GeneratorConfig;
pub use constants::*;
pub use scene::*;
pub use types::*;
