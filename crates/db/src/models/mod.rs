//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO for partial updates

pub mod actor;
pub mod director;
pub mod genre;
pub mod movie;
pub mod production_company;
