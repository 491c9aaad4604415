pub mod cli;
pub mod client;
pub mod config;
pub mod render;

#[cfg(test)]
mod test_utils;
