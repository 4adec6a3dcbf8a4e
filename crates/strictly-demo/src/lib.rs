//! strictly demo — define a few contract functions, then call them.
//!
//! Three functions go through a rejecting checker:
//!
//! - `add(a: Int = 1, b: Int = 2) -> Int`
//! - `concat(s1: Str = "a", s2: Str = "b") -> Str`
//! - `invalid_function(a: Int = "1", b: Str = "b") -> Int`, whose first
//!   default breaks its own contract
//!
//! The first two are bound and callable. The third is reported and left
//! unbound instead of being replaced by a boolean.

use anyhow::{Context, Result};
use strictly_kernel::{
    BoundArgs, CallArgs, CallError, Checker, Contract, ContractFn, Decoration, FunctionTable,
    Param,
};
use strictly_types::{TypeDescriptor, Value};

/// `add(a: Int = 1, b: Int = 2) -> Int`
pub struct Add {
    contract: Contract,
}

impl Add {
    pub fn new() -> Self {
        Self {
            contract: Contract::new()
                .param(Param::typed("a", TypeDescriptor::Int).with_default(1))
                .param(Param::typed("b", TypeDescriptor::Int).with_default(2))
                .returns(TypeDescriptor::Int),
        }
    }
}

impl Default for Add {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractFn for Add {
    fn name(&self) -> &str {
        "add"
    }

    fn contract(&self) -> &Contract {
        &self.contract
    }

    fn call(&self, args: &BoundArgs) -> Result<Value, CallError> {
        let a = args.int("a")?;
        let b = args.int("b")?;
        a.checked_add(b)
            .map(Value::Int)
            .ok_or_else(|| CallError::failed(format!("add({a}, {b}) overflows")))
    }
}

/// `concat(s1: Str = "a", s2: Str = "b") -> Str`
pub struct Concat {
    contract: Contract,
}

impl Concat {
    pub fn new() -> Self {
        Self {
            contract: Contract::new()
                .param(Param::typed("s1", TypeDescriptor::Str).with_default("a"))
                .param(Param::typed("s2", TypeDescriptor::Str).with_default("b"))
                .returns(TypeDescriptor::Str),
        }
    }
}

impl Default for Concat {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractFn for Concat {
    fn name(&self) -> &str {
        "concat"
    }

    fn contract(&self) -> &Contract {
        &self.contract
    }

    fn call(&self, args: &BoundArgs) -> Result<Value, CallError> {
        Ok(Value::String(format!(
            "{}{}",
            args.text("s1")?,
            args.text("s2")?
        )))
    }
}

/// `invalid_function(a: Int = "1", b: Str = "b") -> Int`
pub struct InvalidFunction {
    contract: Contract,
}

impl InvalidFunction {
    pub fn new() -> Self {
        Self {
            contract: Contract::new()
                .param(Param::typed("a", TypeDescriptor::Int).with_default("1"))
                .param(Param::typed("b", TypeDescriptor::Str).with_default("b"))
                .returns(TypeDescriptor::Int),
        }
    }
}

impl Default for InvalidFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractFn for InvalidFunction {
    fn name(&self) -> &str {
        "invalid_function"
    }

    fn contract(&self) -> &Contract {
        &self.contract
    }

    fn call(&self, args: &BoundArgs) -> Result<Value, CallError> {
        args.require("a").cloned()
    }
}

/// Define every demo function in `table`.
pub fn define_all(checker: &Checker, table: &mut FunctionTable) -> Result<Vec<Decoration>> {
    let mut decorations = Vec::new();
    decorations.push(
        table
            .define(checker, Add::new())
            .context("defining add")?,
    );
    decorations.push(
        table
            .define(checker, Concat::new())
            .context("defining concat")?,
    );
    decorations.push(
        table
            .define(checker, InvalidFunction::new())
            .context("defining invalid_function")?,
    );
    Ok(decorations)
}

/// One line per call, the way the demo prints them.
fn call_line(table: &FunctionTable, name: &str, args: CallArgs) -> String {
    let shown: Vec<String> = args
        .positional
        .iter()
        .map(|v| match v {
            Value::String(s) => format!("{s:?}"),
            other => other.to_string(),
        })
        .collect();
    let call = format!("{name}({})", shown.join(", "));
    match table.call(name, args) {
        Ok(value) => format!("{call} = {value}"),
        Err(err) => format!("{call} failed: {err}"),
    }
}

/// What the demo printed, plus a JSON report of verdicts.
#[derive(Debug)]
pub struct DemoOutput {
    pub lines: Vec<String>,
    pub report: serde_json::Value,
}

/// Run the demo.
pub fn run(checker: &Checker) -> Result<DemoOutput> {
    let mut table = FunctionTable::new();
    let decorations = define_all(checker, &mut table)?;

    let mut lines = Vec::new();
    for decoration in &decorations {
        tracing::debug!(function = %decoration.name, verdict = %decoration.verdict, "defined");
        if !decoration.is_bound() {
            lines.push(format!(
                "{} not bound: {}",
                decoration.name, decoration.verdict
            ));
        }
    }

    lines.push(call_line(&table, "add", CallArgs::positional([1, 2])));
    lines.push(call_line(
        &table,
        "concat",
        CallArgs::positional(["Hello, ", "world!"]),
    ));
    lines.push(call_line(
        &table,
        "invalid_function",
        CallArgs::positional([Value::Int(1), Value::from("Hello")]),
    ));

    let verdicts = report(&decorations)?;
    Ok(DemoOutput {
        lines,
        report: verdicts,
    })
}

/// Verdicts as a JSON object keyed by function name.
pub fn report(decorations: &[Decoration]) -> Result<serde_json::Value> {
    let mut map = serde_json::Map::new();
    for decoration in decorations {
        let verdict = serde_json::to_value(&decoration.verdict)
            .with_context(|| format!("serializing verdict for {}", decoration.name))?;
        map.insert(
            decoration.name.clone(),
            serde_json::json!({ "bound": decoration.is_bound(), "result": verdict }),
        );
    }
    Ok(serde_json::Value::Object(map))
}
