//! Ordering tests: levels, tie-breaking, determinism.

#![allow(clippy::unwrap_used)]

use vhdl_order::{OrderConfig, UnitKind, compile_order};

use crate::helpers::library_tree::*;
use crate::helpers::source_fixtures::*;

// =============================================================================
// LEVELS
// =============================================================================

#[test]
fn test_package_entity_architecture_levels() {
    let tree = LibraryTree::new();
    tree.write("a.vhd", ARCH_OF_E);
    tree.write("e.vhd", ENTITY_E_USES_P);
    tree.write("pkg.vhd", PKG_P);

    let order = compile_order(&work_config(tree.root())).unwrap();

    assert_eq!(
        levels(&order),
        vec![
            ("pkg.vhd".to_string(), 0),
            ("e.vhd".to_string(), 1),
            ("a.vhd".to_string(), 2),
        ]
    );
    assert_eq!(order.max_level(), Some(2));
}

#[test]
fn test_dependencies_always_precede_dependents() {
    let tree = LibraryTree::new();
    tree.write("adder.vhd", ENTITY_ADDER);
    tree.write("adder_fast.vhd", ADDER_FAST);
    tree.write("adder_slow.vhd", ADDER_SLOW);
    tree.write("a_top.vhd", TOP_USES_ADDER);

    let order = compile_order(&work_config(tree.root())).unwrap();
    let names = file_names(&order);
    let position = |name: &str| names.iter().position(|n| n == name).unwrap();

    assert!(position("adder.vhd") < position("adder_fast.vhd"));
    assert!(position("adder.vhd") < position("adder_slow.vhd"));
    assert!(position("adder_fast.vhd") < position("a_top.vhd"));
    assert!(position("adder_slow.vhd") < position("a_top.vhd"));
}

#[test]
fn test_empty_file_gets_level_zero_in_discovery_order() {
    let tree = LibraryTree::new();
    tree.write("b_pkg.vhd", PKG_P);
    tree.write("c_empty.vhd", ONLY_COMMENTS);
    tree.write("a_e.vhd", ENTITY_E_USES_P);

    let order = compile_order(&work_config(tree.root())).unwrap();

    assert_eq!(
        levels(&order),
        vec![
            ("b_pkg.vhd".to_string(), 0),
            ("c_empty.vhd".to_string(), 0),
            ("a_e.vhd".to_string(), 1),
        ]
    );
    assert!(order.files()[1].units.is_empty());
}

#[test]
fn test_ties_follow_configured_path_order_not_names() {
    let tree = LibraryTree::new();
    let z = tree.write("z.vhd", "package z is end;");
    let a = tree.write("a.vhd", "package a is end;");

    let config = OrderConfig::new()
        .with_default_path(&z)
        .with_default_path(&a)
        .with_parallel(false);
    let order = compile_order(&config).unwrap();

    assert_eq!(file_names(&order), vec!["z.vhd", "a.vhd"]);
}

#[test]
fn test_nested_directories_are_walked() {
    let tree = LibraryTree::new();
    tree.write("rtl/core/e.vhd", ENTITY_E_USES_P);
    tree.write("pkg/p.vhdl", PKG_P);
    tree.write("docs/readme.txt", "entity not_vhdl is end;");

    let order = compile_order(&work_config(tree.root())).unwrap();
    assert_eq!(file_names(&order), vec!["p.vhdl", "e.vhd"]);
}

// =============================================================================
// NESTED DECLARATIONS
// =============================================================================

#[test]
fn test_local_package_instance_keeps_instantiation_dependency() {
    let tree = LibraryTree::new();
    tree.write("adder.vhd", &format!("use work.q2.all;\n{ENTITY_ADDER}{ADDER_FAST}"));
    tree.write("g.vhd", GENERIC_PKG_G);
    tree.write("q.vhd", "package q is end;");
    tree.write("q2.vhd", "use work.q.all;\npackage q2 is end;");
    tree.write("top.vhd", TOP_WITH_LOCAL_PACKAGE_INSTANCE);

    let order = compile_order(&work_config(tree.root())).unwrap();

    assert_eq!(
        levels(&order),
        vec![
            ("g.vhd".to_string(), 0),
            ("q.vhd".to_string(), 0),
            ("q2.vhd".to_string(), 1),
            ("adder.vhd".to_string(), 2),
            ("top.vhd".to_string(), 3),
        ]
    );
    let top = order.iter().find(|f| f.path.ends_with("top.vhd")).unwrap();
    assert_eq!(top.unit_names(), vec!["TOP", "TOP(RTL)"]);
}

#[test]
fn test_local_packages_are_not_library_units() {
    let tree = LibraryTree::new();
    tree.write("adder.vhd", ENTITY_ADDER);
    tree.write("g.vhd", GENERIC_PKG_G);
    tree.write("a.vhd", "entity e is end;");
    tree.write("e_rtl.vhd", ARCH_WITH_LOCAL_PACKAGE);
    tree.write("top_1.vhd", TOP_WITH_LOCAL_PACKAGE_INSTANCE);
    tree.write(
        "top_2.vhd",
        &TOP_WITH_LOCAL_PACKAGE_INSTANCE.replace("top", "top_two"),
    );

    let order = compile_order(&work_config(tree.root())).unwrap();

    let packages: Vec<String> = order
        .iter()
        .flat_map(|f| f.units.iter())
        .filter(|u| u.kind == UnitKind::Package)
        .map(|u| u.name.to_string())
        .collect();
    assert_eq!(packages, vec!["G"]);

    let e_rtl = order.iter().find(|f| f.path.ends_with("e_rtl.vhd")).unwrap();
    assert_eq!(e_rtl.level, 1);
}

// =============================================================================
// LIBRARIES
// =============================================================================

#[test]
fn test_cross_library_reference() {
    let tree = LibraryTree::new();
    tree.write("work/top.vhd", "library util_lib;\nuse util_lib.p.all;\nentity top is end;");
    tree.write("util/p.vhd", PKG_P);

    let config = OrderConfig::new()
        .with_default_path(tree.path("work"))
        .with_path("util_lib", tree.path("util"))
        .with_parallel(false);
    let order = compile_order(&config).unwrap();

    assert_eq!(file_names(&order), vec!["p.vhd", "top.vhd"]);
    assert_eq!(order.files()[0].library, "UTIL_LIB");
    assert_eq!(order.files()[1].library, "WORK");
    assert!(order.unresolved().iter().all(|u| u.library == "IEEE"));
}

#[test]
fn test_work_inside_library_means_own_library() {
    let tree = LibraryTree::new();
    tree.write("lib/p.vhd", PKG_P);
    tree.write("lib/e.vhd", ENTITY_E_USES_P);
    tree.write("other/p.vhd", PKG_P);

    let config = OrderConfig::new()
        .with_path("other", tree.path("other"))
        .with_path("mylib", tree.path("lib"))
        .with_parallel(false);
    let order = compile_order(&config).unwrap();

    let e = order.iter().find(|f| f.path.ends_with("e.vhd")).unwrap();
    assert_eq!(e.level, 1);
    assert_eq!(e.library, "MYLIB");
}

#[test]
fn test_unit_names_are_reported() {
    let tree = LibraryTree::new();
    tree.write("util.vhd", PKG_WITH_BODY);
    tree.write("adder.vhd", &format!("{ENTITY_ADDER}{ADDER_FAST}"));

    let order = compile_order(&work_config(tree.root())).unwrap();
    let adder = order.iter().find(|f| f.path.ends_with("adder.vhd")).unwrap();
    let util = order.iter().find(|f| f.path.ends_with("util.vhd")).unwrap();

    assert_eq!(adder.unit_names(), vec!["ADDER", "ADDER(FAST)"]);
    assert_eq!(util.unit_names(), vec!["UTIL", "UTIL"]);
    assert_eq!(util.units[1].kind, UnitKind::PackageBody);
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_rerun_is_identical_and_parallel_matches_sequential() {
    let tree = LibraryTree::new();
    for i in 0..24 {
        tree.write(
            &format!("pkg_{i:02}.vhd"),
            &format!("package p{i} is end;"),
        );
        tree.write(
            &format!("ent_{i:02}.vhd"),
            &format!("use work.p{i}.all;\nentity e{i} is end;"),
        );
    }

    let sequential = work_config(tree.root());
    let parallel = sequential.clone().with_parallel(true);

    let first = compile_order(&sequential).unwrap();
    let second = compile_order(&sequential).unwrap();
    let threaded = compile_order(&parallel).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, threaded);
    assert_eq!(first.len(), 48);
    assert!(first.iter().take(24).all(|f| f.level == 0));
}

#[test]
fn test_same_file_listed_twice_is_scanned_once() {
    let tree = LibraryTree::new();
    let p = tree.write("p.vhd", PKG_P);
    tree.write("sub/notes.txt", "");

    let config = OrderConfig::new()
        .with_default_path(tree.root())
        .with_default_path(&p)
        .with_default_path(tree.root().join(".").join("p.vhd"))
        .with_default_path(tree.root().join("sub").join("..").join("p.vhd"))
        .with_parallel(false);
    let order = compile_order(&config).unwrap();

    assert_eq!(order.len(), 1);
    assert_eq!(order.files()[0].path, p);
}

#[test]
fn test_extensions_are_configurable() {
    let tree = LibraryTree::new();
    tree.write("p.vhd", PKG_P);
    tree.write("q.VHO", "package q is end;");

    let config = work_config(tree.root()).with_extensions(["vho"]);
    let order = compile_order(&config).unwrap();

    assert_eq!(file_names(&order), vec!["q.VHO"]);
}

// =============================================================================
// SERIALIZATION
// =============================================================================

#[cfg(feature = "serde")]
#[test]
fn test_compile_order_serializes_to_json() {
    let tree = LibraryTree::new();
    tree.write("pkg.vhd", PKG_P);

    let order = compile_order(&work_config(tree.root())).unwrap();
    let json = serde_json::to_value(&order).unwrap();

    let file = &json["files"][0];
    assert_eq!(file["library"], "WORK");
    assert_eq!(file["level"], 0);
    assert_eq!(file["units"][0]["name"], "P");
    assert_eq!(file["units"][0]["kind"], "Package");
}

#[cfg(feature = "serde")]
#[test]
fn test_config_deserializes_with_defaults() {
    let config: OrderConfig = serde_json::from_value(serde_json::json!({
        "libraries": { "WORK": ["rtl"] },
        "use_units": ["adder(fast)"]
    }))
    .unwrap();

    assert_eq!(config.default_library, "WORK");
    assert_eq!(config.use_units, vec!["adder(fast)"]);
    assert!(config.parallel);
}
