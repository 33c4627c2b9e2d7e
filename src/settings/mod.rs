//! Discovery settings: the per-request timeout and the server/endpoint
//! lists each discovery method walks. A `Settings` value is an immutable
//! snapshot, built once from defaults or loaded wholesale from a TOML file,
//! and consumed by value when constructing a client.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
