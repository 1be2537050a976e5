//! Row structs and input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - The input struct its repository writes from

pub mod artist;
pub mod show;
pub mod venue;
