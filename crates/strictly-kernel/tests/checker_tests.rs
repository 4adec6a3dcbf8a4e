//! Integration tests for the checker's two operations.
//!
//! `check_type` is a pure predicate over (value, descriptor); `check_function`
//! validates declared defaults and, when a return clause exists, really calls
//! the function once with those defaults.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use rstest::rstest;

use strictly_kernel::{
    CallArgs, CallError, CheckError, Checker, CheckerConfig, Contract, ContractFn, Function,
    Param, Registry, Verdict,
};
use strictly_types::TypeDescriptor::{self, Int, Str};
use strictly_types::{NativeKind, Value};

fn add() -> Function {
    Function::new(
        "add",
        Contract::new()
            .param(Param::typed("a", Int).with_default(1))
            .param(Param::typed("b", Int).with_default(2))
            .returns(Int),
        |args| {
            let (a, b) = (args.int("a")?, args.int("b")?);
            a.checked_add(b)
                .map(Value::Int)
                .ok_or_else(|| CallError::failed("add overflows"))
        },
    )
}

fn concat() -> Function {
    Function::new(
        "concat",
        Contract::new()
            .param(Param::typed("s1", Str).with_default("a"))
            .param(Param::typed("s2", Str).with_default("b"))
            .returns(Str),
        |args| Ok(Value::String(format!("{}{}", args.text("s1")?, args.text("s2")?))),
    )
}

/// A function whose body counts its invocations and returns `value`.
fn counting(contract: Contract, value: Value) -> (Function, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let f = Function::new("counted", contract, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(value.clone())
    });
    (f, calls)
}

// ============================================================================
// check_type
// ============================================================================

#[rstest]
#[case(Value::Int(3), Int, true)]
#[case(Value::from("x"), Int, false)]
#[case(Value::Int(3), Str, false)]
#[case(Value::from("x"), Str, true)]
#[case(Value::from(""), Str, true)]
#[case(Value::Null, Int, false)]
#[case(Value::Null, Str, false)]
#[case(Value::Bool(true), Int, false)]
#[case(Value::Float(3.0), Int, false)]
fn check_type_cases(#[case] value: Value, #[case] descriptor: TypeDescriptor, #[case] expected: bool) {
    assert_eq!(Checker::default().check_type(&value, descriptor), expected);
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        ".*".prop_map(Value::String),
    ]
}

fn any_descriptor() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![Just(Int), Just(Str)]
}

fn any_registry() -> impl Strategy<Value = Registry> {
    prop_oneof![
        Just(Registry::builtin()),
        Just(Registry::empty()),
        Just(Registry::from_entries([("Int", NativeKind::Int)])),
        Just(Registry::from_entries([("Str", NativeKind::Str)])),
    ]
}

proptest! {
    #[test]
    fn check_type_is_registered_and_instance(
        value in any_value(),
        descriptor in any_descriptor(),
        registry in any_registry(),
    ) {
        let kind = descriptor.native_kind();
        let expected = registry.is_known(kind) && value.kind() == kind;
        let checker = Checker::new(CheckerConfig::default().with_registry(registry));
        prop_assert_eq!(checker.check_type(&value, descriptor), expected);
    }
}

#[test]
fn unknown_descriptor_fails_for_matching_value() {
    let checker = Checker::new(CheckerConfig::default().with_registry(Registry::empty()));
    assert!(!checker.check_type(&Value::Int(3), Int));
    assert!(!checker.check_type(&Value::from("x"), Str));
}

// ============================================================================
// check_function
// ============================================================================

#[test]
fn add_passes_and_still_adds() {
    let checker = Checker::default();
    let f = add();
    assert_eq!(checker.check_function(&f), Ok(true));
    assert_eq!(f.invoke_defaults(), Ok(Value::Int(3)));
    assert_eq!(f.invoke(CallArgs::positional([1, 2])), Ok(Value::Int(3)));
}

#[test]
fn concat_passes() {
    let checker = Checker::default();
    let f = concat();
    assert_eq!(checker.check_function(&f), Ok(true));
    assert_eq!(
        f.invoke(CallArgs::positional(["Hello, ", "world!"])),
        Ok(Value::from("Hello, world!"))
    );
}

#[test]
fn no_descriptors_always_passes() {
    let (f, calls) = counting(
        Contract::new().param(Param::new("x").with_default("anything")),
        Value::Null,
    );
    assert_eq!(Checker::default().check_function(&f), Ok(true));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn descriptor_without_default_is_not_checked() {
    let (f, calls) = counting(Contract::new().param(Param::typed("a", Int)), Value::Null);
    assert_eq!(Checker::default().check_function(&f), Ok(true));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn bad_default_fails_without_invoking_body() {
    let (f, calls) = counting(
        Contract::new()
            .param(Param::typed("a", Int).with_default("not a number"))
            .returns(Int),
        Value::Int(1),
    );
    assert_eq!(Checker::default().check_function(&f), Ok(false));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn first_bad_default_stops_checking() {
    let checker = Checker::default();
    let (f, _) = counting(
        Contract::new()
            .param(Param::typed("a", Int).with_default("x"))
            .param(Param::typed("b", Str).with_default(5)),
        Value::Null,
    );
    let verdict = checker.validate(&f).unwrap();
    let violation = verdict.violation().unwrap();
    assert_eq!(
        violation.to_string(),
        "parameter 'a' must be Int, got str"
    );
}

#[rstest]
#[case(Int, Value::Int(9), true)]
#[case(Int, Value::from("9"), false)]
#[case(Str, Value::from("nine"), true)]
#[case(Str, Value::Null, false)]
fn return_only_matches_check_type(
    #[case] descriptor: TypeDescriptor,
    #[case] value: Value,
    #[case] expected: bool,
) {
    let checker = Checker::default();
    let (f, _) = counting(Contract::new().returns(descriptor), value.clone());
    let direct = checker.check_type(&value, descriptor);
    assert_eq!(direct, expected);
    assert_eq!(checker.check_function(&f), Ok(direct));
}

#[test]
fn return_check_invokes_every_time() {
    let checker = Checker::default();
    let (f, calls) = counting(Contract::new().returns(Int), Value::Int(1));
    assert_eq!(checker.check_function(&f), Ok(true));
    assert_eq!(checker.check_function(&f), Ok(true));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn return_check_sees_defaults() {
    let seen = Arc::new(AtomicUsize::new(0));
    let recorder = Arc::clone(&seen);
    let f = Function::new(
        "echo_a",
        Contract::new()
            .param(Param::typed("a", Int).with_default(41))
            .returns(Int),
        move |args| {
            let a = args.int("a")?;
            recorder.store(a as usize, Ordering::SeqCst);
            Ok(Value::Int(a + 1))
        },
    );
    assert_eq!(Checker::default().check_function(&f), Ok(true));
    assert_eq!(seen.load(Ordering::SeqCst), 41);
}

#[test]
fn execution_failure_propagates() {
    let f = Function::new("boom", Contract::new().returns(Int), |_| {
        Err(CallError::failed("exploded"))
    });
    let err = Checker::default().check_function(&f).unwrap_err();
    assert_eq!(
        err,
        CheckError::Execution {
            function: "boom".into(),
            source: CallError::failed("exploded"),
        }
    );
}

#[test]
fn missing_default_surfaces_as_execution_failure() {
    let f = Function::new(
        "needs_arg",
        Contract::new().param(Param::typed("a", Int)).returns(Int),
        |args| Ok(Value::Int(args.int("a")?)),
    );
    let err = Checker::default().check_function(&f).unwrap_err();
    assert!(matches!(
        err,
        CheckError::Execution {
            source: CallError::MissingArgument { .. },
            ..
        }
    ));
}

#[test]
fn uncheckable_return_never_invokes() {
    let (f, calls) = counting(
        Contract::new()
            .param(Param::typed("a", Int))
            .returns_uncheckable(Int),
        Value::Int(1),
    );
    let checker = Checker::default();
    assert_eq!(checker.validate(&f), Ok(Verdict::Uncheckable));
    assert!(matches!(
        checker.check_function(&f),
        Err(CheckError::Uncheckable { .. })
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn repeated_checks_agree() {
    let checker = Checker::default();
    let f = concat();
    let first = checker.check_function(&f);
    for _ in 0..3 {
        assert_eq!(checker.check_function(&f), first);
    }
}

#[test]
fn checker_is_shareable_across_threads() {
    let checker = Arc::new(Checker::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let checker = Arc::clone(&checker);
            std::thread::spawn(move || checker.check_function(&add()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(true));
    }
}
