//! Fleet inventory: the immutable fixture store and the queries the
//! dashboard runs over it.

pub mod badge;
pub mod model;
pub mod sample;
pub mod service;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use badge::{Tone, Toned};
pub use service::InventoryService;
pub use store::{Inventory, InventoryParts};
