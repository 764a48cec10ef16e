#![doc = include_str!("../README.md")]
//!
//! # Architecture
//!
//! The generator is split into several modules:
//!
//! - **scanner**: Finding `generated_co_wrapper` declarations in the input
//! - **parser**: Splitting a declaration into typed, named parameters
//! - **types**: Data structures representing declarations
//! - **validation**: Checking declarations against the wrapper conventions
//! - **codegen**: Emitting the file header and one block per wrapper
//!
//! # Example
//!
//! ```
//! use co_wrapper_codegen::{GeneratorConfig, generate};
//!
//! let input = "int generated_co_wrapper bdrv_flush(BlockDriverState *bs);\n";
//! let code = generate(input, &GeneratorConfig::default()).unwrap();
//! assert!(code.contains("int bdrv_flush(BlockDriverState *bs)"));
//! assert!(code.contains("qemu_coroutine_create(bdrv_co_flush_entry, &s);"));
//! ```

use co_wrapper_core::Result;
use log::{debug, warn};
use std::collections::HashMap;

pub mod codegen;
mod config;
mod parser;
pub mod scanner;
mod types;
mod validation;

pub use config::GeneratorConfig;
pub use types::{FuncDecl, ParamDecl, WrapperPlan};

/// Generate the wrappers for every marked declaration in `input`.
///
/// The output starts with the header and contains one block per declaration,
/// in input order, each preceded by two blank lines. It does not end with a
/// newline.
///
/// # Errors
///
/// The first malformed, unsupported or drifting declaration aborts the whole
/// run; no partial output is returned.
pub fn generate(input: &str, config: &GeneratorConfig) -> Result<String> {
    let counterparts = if config.cross_check {
        collect_counterparts(input)
    } else {
        HashMap::new()
    };

    let mut res = codegen::header::generate_header(&config.generator_name);
    for func in scanner::wrapper_decls(input) {
        let func = func?;
        let plan = func.validate()?;
        debug!(
            "wrapping {} around {} ({} parameters)",
            func.name,
            plan.coroutine,
            func.args.len()
        );

        if let Some(counterpart) = counterparts.get(&plan.coroutine) {
            plan.check_counterpart(counterpart)?;
        }

        res.push_str("\n\n\n");
        res.push_str(&plan.expand());
    }

    Ok(res)
}

/// Coroutine declarations visible in the input, keyed by name.
///
/// The first declaration of a name wins. Declarations that do not parse are
/// left out: they are not wrappers, and the compiler will judge them.
fn collect_counterparts(input: &str) -> HashMap<String, FuncDecl> {
    let mut found = HashMap::new();
    for decl in scanner::coroutine_decls(input) {
        match decl {
            Ok(decl) => {
                found.entry(decl.name.clone()).or_insert(decl);
            }
            Err(err) => warn!("not cross-checking against coroutine: {err}"),
        }
    }
    found
}
