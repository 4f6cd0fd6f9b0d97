pub mod quote;

pub use quote::*;

#[cfg(test)]
mod tests;
