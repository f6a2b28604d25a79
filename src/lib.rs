//! Nimbus library exports for testing

pub mod core;
pub mod tui;
pub mod weather;

#[cfg(test)]
pub mod test_support;
