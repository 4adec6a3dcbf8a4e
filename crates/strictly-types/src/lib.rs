//! strictly-types: pure data types shared by the strictly crates.
//!
//! This crate has no checking logic. It provides:
//!
//! - **Value**: the runtime values a contract can talk about
//! - **NativeKind**: the primitive kind of a value
//! - **TypeDescriptor**: the closed set of markers a contract is written in

mod descriptor;
mod value;

pub use descriptor::TypeDescriptor;
pub use value::{NativeKind, Value};
