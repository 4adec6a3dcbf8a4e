//! strictly-kernel: runtime contract checks for functions.
//!
//! This crate provides:
//!
//! - **Registry**: the descriptor kinds a checker recognizes
//! - **Contract**: declared parameter descriptors, defaults, and return clause
//! - **ContractFn**: the trait every checked function implements
//! - **Checker**: `check_type`, `check_function`, and the richer `validate`
//! - **Decoration**: binding policies and the call-time `Guarded` wrapper
//! - **FunctionTable**: names bound through decoration
//!
//! # Example
//!
//! ```
//! use strictly_kernel::{CallArgs, CallError, Checker, Contract, Function, FunctionTable, Param};
//! use strictly_types::{TypeDescriptor, Value};
//!
//! let checker = Checker::default();
//! let add = Function::new(
//!     "add",
//!     Contract::new()
//!         .param(Param::typed("a", TypeDescriptor::Int).with_default(1))
//!         .param(Param::typed("b", TypeDescriptor::Int).with_default(2))
//!         .returns(TypeDescriptor::Int),
//!     |args| {
//!         let (a, b) = (args.int("a")?, args.int("b")?);
//!         a.checked_add(b)
//!             .map(Value::Int)
//!             .ok_or_else(|| CallError::failed("add overflows"))
//!     },
//! );
//! assert_eq!(checker.check_function(&add), Ok(true));
//!
//! let mut table = FunctionTable::new();
//! table.define(&checker, add).unwrap();
//! assert_eq!(table.call("add", CallArgs::positional([1, 2])), Ok(Value::Int(3)));
//! ```

pub mod args;
pub mod checker;
pub mod config;
pub mod contract;
pub mod decorate;
pub mod error;
pub mod function;
pub mod registry;
pub mod table;

pub use args::{BoundArgs, CallArgs};
pub use checker::{Checker, Verdict, Violation};
pub use config::CheckerConfig;
pub use contract::{Contract, Param, ReturnClause, RETURN_KEY};
pub use decorate::{BindPolicy, Decoration, Guarded};
pub use error::{CallError, CheckError, CheckResult, ContractError};
pub use function::{ContractFn, Function};
pub use registry::Registry;
pub use table::FunctionTable;
