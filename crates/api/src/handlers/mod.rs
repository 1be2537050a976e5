//! Request handlers, one module per resource.

pub mod artist;
pub mod home;
pub mod show;
pub mod venue;
