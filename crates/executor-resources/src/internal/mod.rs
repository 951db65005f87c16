pub mod common;
pub mod config;

#[cfg(test)]
pub mod tests;
