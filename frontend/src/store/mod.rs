pub mod client;
mod memory;
pub mod types;

pub use client::*;
pub use memory::MemoryStore;
pub use types::*;

#[cfg(test)]
mod tests;
