//! Common test utilities and infrastructure
//!
//! The cucumber world driving a headless `AppController`.

pub mod world;

// Re-export commonly used items
#[allow(unused_imports)]
pub use world::CounterWorld;
