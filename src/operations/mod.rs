//! Face operations in builder/command style: construct with `new`, tune with
//! builder methods, then `execute` against the store (and index, if needed).

pub mod creation;
pub mod modification;
pub mod query;
