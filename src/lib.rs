pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod repl;

#[cfg(test)]
pub mod test_helpers;
