//! Request handlers, one module per resource.
//!
//! Handlers validate the incoming DTO, call the matching repository, and
//! turn a missing row into [`CoreError::NotFound`](cinema_core::error::CoreError).

pub mod actor;
pub mod company;
pub mod director;
pub mod genre;
pub mod movie;
