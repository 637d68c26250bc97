#![doc = include_str!("RUSTDOC.md")]

pub mod remote_config;
pub mod util;

#[cfg(test)]
pub mod test_support;
