//! Fatal errors and the non-fatal unresolved reference channel.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use rstest::rstest;
use vhdl_order::{OrderConfig, OrderError, compile_order};

use crate::helpers::library_tree::*;
use crate::helpers::source_fixtures::*;

// =============================================================================
// FATAL
// =============================================================================

#[test]
fn test_duplicate_architecture_names_both_files() {
    let tree = LibraryTree::new();
    tree.write("adder.vhd", ENTITY_ADDER);
    let first = tree.write("fast_1.vhd", ADDER_FAST);
    let second = tree.write("fast_2.vhd", ADDER_FAST);

    let err = compile_order(&work_config(tree.root())).unwrap_err();

    match &err {
        OrderError::DuplicateUnitDeclaration { first: a, second: b, library, .. } => {
            assert_eq!(a, &first);
            assert_eq!(b, &second);
            assert_eq!(library, "WORK");
        }
        other => panic!("expected DuplicateUnitDeclaration, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("fast_1.vhd") && message.contains("fast_2.vhd"));
}

#[test]
fn test_duplicate_detection_is_independent_of_threads() {
    let tree = LibraryTree::new();
    for i in 0..16 {
        tree.write(&format!("p_{i:02}.vhd"), PKG_P);
    }

    let sequential = compile_order(&work_config(tree.root())).unwrap_err();
    let parallel = compile_order(&work_config(tree.root()).with_parallel(true)).unwrap_err();

    assert_eq!(sequential.to_string(), parallel.to_string());
    assert!(sequential.to_string().contains("p_00.vhd"));
    assert!(sequential.to_string().contains("p_01.vhd"));
}

#[test]
fn test_two_file_cycle_fails() {
    let tree = LibraryTree::new();
    let a = tree.write("a.vhd", PKG_A_USES_B);
    let b = tree.write("b.vhd", PKG_B_USES_A);

    let err = compile_order(&work_config(tree.root())).unwrap_err();

    match err {
        OrderError::CyclicDependency { path, cycle } => {
            assert_eq!(path, a);
            assert_eq!(cycle, vec![a.clone(), b, a]);
        }
        other => panic!("expected CyclicDependency, got {other:?}"),
    }
}

#[test]
fn test_missing_path_is_file_access_error() {
    let tree = LibraryTree::new();
    let missing = tree.path("nope");
    let config = OrderConfig::new().with_default_path(&missing);

    let err = compile_order(&config).unwrap_err();

    match err {
        OrderError::FileAccess { path, .. } => assert_eq!(path, missing),
        other => panic!("expected FileAccess, got {other:?}"),
    }
}

#[rstest]
#[case::unterminated("adder(fast")]
#[case::empty_architecture("adder()")]
#[case::nested("adder((fast))")]
#[case::empty_name("(fast)")]
#[case::no_architecture("adder")]
fn test_invalid_use_selector_fails_before_scanning(#[case] selector: &str) {
    let config = OrderConfig::new()
        .with_default_path(PathBuf::from("/definitely/not/here"))
        .with_use_unit(selector);

    let err = compile_order(&config).unwrap_err();
    assert!(
        matches!(err, OrderError::InvalidUnitReference { ref input, .. } if input == selector),
        "got {err:?}"
    );
}

#[test]
fn test_invalid_top_selector_fails() {
    let config = OrderConfig::new().with_top_unit("lib.top(");
    let err = compile_order(&config).unwrap_err();
    assert!(matches!(err, OrderError::InvalidUnitReference { .. }));
}

// =============================================================================
// NON-FATAL
// =============================================================================

#[test]
fn test_unresolved_reference_does_not_fail() {
    let tree = LibraryTree::new();
    tree.write("lonely.vhd", USES_MISSING_PACKAGE);

    let order = compile_order(&work_config(tree.root())).unwrap();

    assert_eq!(order.len(), 1);
    assert_eq!(order.files()[0].level, 0);
    assert_eq!(order.unresolved().len(), 1);
    assert_eq!(
        order.unresolved()[0].reference.to_string(),
        "package WORK.DOES_NOT_EXIST"
    );
}

#[test]
fn test_missing_top_unit_only_warns() {
    let tree = LibraryTree::new();
    tree.write("p.vhd", PKG_P);

    let config = work_config(tree.root()).with_top_unit("no_such_top");
    let order = compile_order(&config).unwrap();
    assert_eq!(order.len(), 1);
}
