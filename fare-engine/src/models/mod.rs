pub mod trip;

pub use trip::*;

#[cfg(test)]
mod tests;
