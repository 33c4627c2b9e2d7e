//! The discovery client: one discoverer per method, tried in a fixed
//! priority order until one produces a validated address.

pub mod impls;
pub mod types;
