//! Integration tests for the fallback chain.
//!
//! Accessors outside the label convention, or naming an empty group, go to the handlers the
//! embedder registered. These tests cover resolution by a handler, passing a call along the
//! chain, and errors that must reach the caller unchanged.

use std::{
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use constlabel::{
    labels::{Dispatcher, FallbackHandler, GroupCache, Resolution},
    metadata::{ConstValue, TypeBuilder, TypeDescriptor, TypeDescriptorRc},
    Error, Result,
};

fn owner() -> TypeDescriptorRc {
    TypeBuilder::new("Account")
        .constant("STATUS_OPEN", 1)
        .constant("STATUS_CLOSED", 2)
        .build()
        .unwrap()
}

fn dispatcher() -> Dispatcher {
    Dispatcher::with_cache(Arc::new(GroupCache::new()))
}

/// Resolves `describe*` accessors, misses on everything else
struct Describe;

impl FallbackHandler for Describe {
    fn dispatch(
        &self,
        owner: &TypeDescriptor,
        accessor: &str,
        _args: &[ConstValue],
    ) -> Result<Resolution> {
        match accessor.strip_prefix("describe") {
            Some(what) => Ok(Resolution::Label(format!("{} {}", owner.name(), what))),
            None => Err(Error::UndefinedOperation {
                type_name: owner.name().to_string(),
                accessor: accessor.to_string(),
            }),
        }
    }
}

#[derive(Debug)]
struct StoreOffline;

impl fmt::Display for StoreOffline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("label store offline")
    }
}

impl std::error::Error for StoreOffline {}

#[test]
fn test_fallback_resolves_unknown_accessor() -> Result<()> {
    let dispatcher = dispatcher().with_fallback(Describe);

    let resolved = dispatcher.resolve(&owner(), "describeBalance", &[])?;
    assert_eq!(resolved, Resolution::Label("Account Balance".to_string()));
    Ok(())
}

#[test]
fn test_convention_wins_over_fallback() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let dispatcher = dispatcher().with_fallback(
        move |_: &TypeDescriptor, _: &str, _: &[ConstValue]| -> Result<Resolution> {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(Resolution::Label("fallback".to_string()))
        },
    );

    assert_eq!(dispatcher.label(&owner(), "constStatus", 1)?, "Open");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[test]
fn test_empty_group_goes_to_fallback() -> Result<()> {
    let dispatcher = dispatcher().with_fallback(
        |_: &TypeDescriptor, accessor: &str, args: &[ConstValue]| -> Result<Resolution> {
            assert_eq!(accessor, "constCurrency");
            assert_eq!(args, &[ConstValue::from("EUR")]);
            Ok(Resolution::Label("Euro".to_string()))
        },
    );

    assert_eq!(dispatcher.label(&owner(), "constCurrency", "EUR")?, "Euro");
    Ok(())
}

#[test]
fn test_miss_passes_to_next_handler() -> Result<()> {
    let dispatcher = dispatcher().with_fallback(Describe).with_fallback(
        |_: &TypeDescriptor, _: &str, _: &[ConstValue]| -> Result<Resolution> {
            Ok(Resolution::Label("second".to_string()))
        },
    );

    assert_eq!(
        dispatcher.resolve(&owner(), "fetchBalance", &[])?,
        Resolution::Label("second".to_string())
    );
    Ok(())
}

#[test]
fn test_all_handlers_miss() {
    let dispatcher = dispatcher().with_fallback(Describe);

    match dispatcher.resolve(&owner(), "fetchBalance", &[]) {
        Err(Error::UndefinedOperation {
            type_name,
            accessor,
        }) => {
            assert_eq!(type_name, "Account");
            assert_eq!(accessor, "fetchBalance");
        }
        other => panic!("expected UndefinedOperation, got {other:?}"),
    }
}

#[test]
fn test_empty_group_with_missing_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let dispatcher = dispatcher().with_fallback(
        move |owner: &TypeDescriptor, accessor: &str, args: &[ConstValue]| -> Result<Resolution> {
            seen.fetch_add(1, Ordering::SeqCst);
            Describe.dispatch(owner, accessor, args)
        },
    );

    match dispatcher.resolve(&owner(), "constCurrency", &[]) {
        Err(Error::UndefinedOperation {
            type_name,
            accessor,
        }) => {
            assert_eq!(type_name, "Account");
            assert_eq!(accessor, "constCurrency");
        }
        other => panic!("expected UndefinedOperation, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unexpected_failure_is_reraised() {
    let second_called = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&second_called);
    let dispatcher = dispatcher()
        .with_fallback(
            |_: &TypeDescriptor, _: &str, _: &[ConstValue]| -> Result<Resolution> {
                Err(Error::unexpected(StoreOffline))
            },
        )
        .with_fallback(
            move |_: &TypeDescriptor, _: &str, _: &[ConstValue]| -> Result<Resolution> {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(Resolution::Label("second".to_string()))
            },
        );

    match dispatcher.resolve(&owner(), "fetchBalance", &[]) {
        Err(Error::Unexpected(source)) => {
            assert!(source.downcast_ref::<StoreOffline>().is_some());
            assert_eq!(source.to_string(), "label store offline");
        }
        other => panic!("expected Unexpected, got {other:?}"),
    }
    assert_eq!(second_called.load(Ordering::SeqCst), 0);
}

#[test]
fn test_fallback_lookup_errors_are_not_reinterpreted() {
    let dispatcher = dispatcher().with_fallback(
        |owner: &TypeDescriptor, accessor: &str, args: &[ConstValue]| -> Result<Resolution> {
            Err(Error::InvalidLookupValue {
                type_name: owner.name().to_string(),
                accessor: accessor.to_string(),
                value: args[0].clone(),
            })
        },
    );

    let result = dispatcher.label(&owner(), "legacyStatus", 7);
    assert!(matches!(
        result,
        Err(Error::InvalidLookupValue {
            value: ConstValue::Integer(7),
            ..
        })
    ));
}

#[test]
fn test_labels_rejects_single_label_from_fallback() {
    let dispatcher = dispatcher().with_fallback(Describe);

    let result = dispatcher.labels(&owner(), "describeBalance");
    assert!(matches!(result, Err(Error::Unexpected(_))));
}
