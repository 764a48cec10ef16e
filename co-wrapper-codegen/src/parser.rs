//! Parsing logic for wrapper declarations.
//!
//! This module turns the raw pieces captured by the scanner into our
//! internal data structures:
//! - A parameter list is split on commas (function pointer parameters are
//!   not part of the grammar, so there is no nesting to track)
//! - Each fragment has its whitespace runs collapsed to single spaces, then
//!   is split into the longest type prefix ending in a space or `*`, and a
//!   trailing lowercase identifier
//!
//! Anything that does not fit is a `MalformedDeclaration`. The caller never
//! skips such a declaration: a dropped wrapper would only show up later as a
//! confusing link failure.

use crate::types::*;
use co_wrapper_core::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static PARAM_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<decl>(?P<type>.*[ *])(?P<name>[a-z][a-z0-9_]*))$")
        .expect("parameter declaration pattern is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

impl ParamDecl {
    /// Parse one parameter fragment such as `QEMUIOVector *qiov`.
    ///
    /// Surrounding whitespace is ignored and every inner run of whitespace
    /// (tabs, line breaks) becomes a single space, so `ty` and `decl` are
    /// always on one line. Returns `None` for anonymous parameters, `void`,
    /// array declarators and anything else that does not end in an
    /// identifier preceded by whitespace or `*`.
    pub fn parse(fragment: &str) -> Option<Self> {
        let fragment = WHITESPACE_RUN.replace_all(fragment.trim(), " ");
        let caps = PARAM_DECL.captures(&fragment)?;
        Some(Self {
            decl: caps["decl"].to_owned(),
            ty: caps["type"].to_owned(),
            name: caps["name"].to_owned(),
        })
    }
}

impl FuncDecl {
    /// Build a declaration from its return type, name and raw argument text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDeclaration`] for the first fragment of
    /// `args` that [`ParamDecl::parse`] rejects. An empty argument list is
    /// rejected as well, since a wrapper needs at least its handle.
    pub fn new(return_type: &str, name: &str, args: &str) -> Result<Self> {
        let name = name.trim();
        let args = args
            .split(',')
            .map(|fragment| {
                ParamDecl::parse(fragment).ok_or_else(|| Error::MalformedDeclaration {
                    function: name.to_owned(),
                    fragment: fragment.trim().to_owned(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            return_type: return_type.trim().to_owned(),
            name: name.to_owned(),
            args,
        })
    }
}
