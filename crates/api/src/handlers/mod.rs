//! Request handlers, one module per resource.

pub mod budget;
pub mod calculate;
pub mod expense;
pub mod meta;
