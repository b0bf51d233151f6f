//! Domain primitives shared by the database and HTTP layers.
//!
//! Nothing in this crate touches the database or the network.

pub mod dates;
pub mod error;
pub mod patch;
pub mod types;
