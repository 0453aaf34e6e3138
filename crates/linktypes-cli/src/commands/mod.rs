pub mod emit;
pub mod generate;
pub mod run_common;

#[cfg(test)]
mod emit_tests;
