//! Post store implementations.

mod memory;

pub use memory::InMemoryPostStore;

#[cfg(test)]
mod tests;
