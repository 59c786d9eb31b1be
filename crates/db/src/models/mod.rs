//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row and, where rows are inserted from outside the repository, a create DTO.

pub mod feedback;
pub mod progress;
pub mod session;
pub mod skill;
pub mod user;
