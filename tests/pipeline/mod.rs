//! End-to-end tests for `compile_order` over on-disk library trees.

mod tests_compile_order;
mod tests_errors;
