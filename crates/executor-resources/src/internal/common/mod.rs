pub mod error;
pub mod resources;
