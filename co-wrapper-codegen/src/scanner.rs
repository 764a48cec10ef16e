//! Locating marked declarations in concatenated C sources.
//!
//! Only one statement shape is recognised, anchored at the start of a line:
//!
//! ```text
//! int generated_co_wrapper bdrv_preadv(BdrvChild *child, int64_t offset);
//! ```
//!
//! Matches come back in source order. Nothing is reordered or deduplicated;
//! a declaration that appears twice yields two wrappers.

use crate::types::FuncDecl;
use co_wrapper_core::{Result, STATUS_TYPE};
use log::trace;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static WRAPPER_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?mR)^int\s*generated_co_wrapper\s*(?P<wrapper_name>[a-z][a-z0-9_]*)\((?P<args>[^)]*)\);$",
    )
    .expect("wrapper declaration pattern is valid")
});

static COROUTINE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^int\s*coroutine_fn\s*(?P<co_name>[a-z][a-z0-9_]*)\((?P<args>[^)]*)\);$")
        .expect("coroutine declaration pattern is valid")
});

/// Iterate over every `generated_co_wrapper` declaration in `text`.
///
/// Each item is parsed as it is reached; a malformed parameter list surfaces
/// as an `Err` item at its position in the sequence.
pub fn wrapper_decls(text: &str) -> impl Iterator<Item = Result<FuncDecl>> + '_ {
    WRAPPER_DECL
        .captures_iter(text)
        .map(|caps| to_func_decl(&caps, "wrapper_name"))
}

/// Iterate over every single-statement `coroutine_fn` declaration in `text`.
pub fn coroutine_decls(text: &str) -> impl Iterator<Item = Result<FuncDecl>> + '_ {
    COROUTINE_DECL
        .captures_iter(text)
        .map(|caps| to_func_decl(&caps, "co_name"))
}

fn to_func_decl(caps: &Captures<'_>, name_group: &str) -> Result<FuncDecl> {
    trace!("matched declaration: {}", &caps[0]);
    FuncDecl::new(STATUS_TYPE, &caps[name_group], &caps["args"])
}
