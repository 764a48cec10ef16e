//! Validation logic for wrapper declarations.
//!
//! This module ensures that a declaration can be bridged before we try to
//! generate code. It checks for:
//! - `int` as the return type
//! - A `bdrv_` name that is not itself a `bdrv_co_` coroutine name
//! - A first parameter of type `BlockDriverState *` or `BdrvChild *`
//! - Parameter names that do not collide with each other or with the
//!   locals of the generated code
//!
//! It also compares a wrapper with its coroutine when both are declared in
//! the same input.

use crate::types::*;
use co_wrapper_core::{
    COROUTINE_PREFIX, Error, HandleKind, Result, STATUS_TYPE, WRAPPER_PREFIX, coroutine_name,
};
use std::collections::HashSet;

/// Identifiers the emitted code declares itself.
const RESERVED_NAMES: &[&str] = &["s", "poll_state"];

fn unsupported(decl: &FuncDecl, reason: impl Into<String>) -> Error {
    Error::UnsupportedSignature {
        function: decl.name.clone(),
        reason: reason.into(),
    }
}

/// Collapse whitespace and detach `*` so that `char*` and `char *` compare equal.
fn normalize_type(ty: &str) -> String {
    ty.replace('*', " * ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl FuncDecl {
    /// Validate the declaration and resolve what the emitter needs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSignature`] describing the first rule the
    /// declaration breaks.
    pub fn validate(&self) -> Result<WrapperPlan<'_>> {
        if self.return_type != STATUS_TYPE {
            return Err(unsupported(
                self,
                format!(
                    "return type must be `{STATUS_TYPE}`, found `{}`",
                    self.return_type
                ),
            ));
        }

        // Wrapper names map onto coroutine names by a fixed prefix swap
        if self.name.starts_with(COROUTINE_PREFIX) {
            return Err(unsupported(
                self,
                format!("`{COROUTINE_PREFIX}` names the coroutine itself, not a wrapper"),
            ));
        }
        let coroutine = coroutine_name(&self.name).ok_or_else(|| {
            unsupported(self, format!("name must start with `{WRAPPER_PREFIX}`"))
        })?;

        let first = self
            .args
            .first()
            .ok_or_else(|| unsupported(self, "missing the block driver handle parameter"))?;
        let handle = HandleKind::from_type(&first.ty).ok_or_else(|| {
            unsupported(
                self,
                format!(
                    "first parameter must be `{}` or `{}`, found `{}`",
                    HandleKind::Direct.type_text(),
                    HandleKind::Child.type_text(),
                    first.ty
                ),
            )
        })?;

        let mut seen = HashSet::new();
        for arg in &self.args {
            if RESERVED_NAMES.contains(&arg.name.as_str()) {
                return Err(unsupported(
                    self,
                    format!("parameter name `{}` is used by the generated code", arg.name),
                ));
            }
            if !seen.insert(arg.name.as_str()) {
                return Err(unsupported(
                    self,
                    format!("duplicate parameter `{}`", arg.name),
                ));
            }
        }

        Ok(WrapperPlan {
            decl: self,
            coroutine,
            handle,
            owner: handle.owner_expr(&first.name),
        })
    }
}

impl WrapperPlan<'_> {
    /// Compare the wrapper's parameters with the declared coroutine.
    ///
    /// Types are compared position by position after whitespace
    /// normalisation; names may differ.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SignatureDrift`] naming the first mismatch.
    pub fn check_counterpart(&self, counterpart: &FuncDecl) -> Result<()> {
        let drift = |reason: String| Error::SignatureDrift {
            function: self.decl.name.clone(),
            counterpart: counterpart.name.clone(),
            reason,
        };

        if self.decl.args.len() != counterpart.args.len() {
            return Err(drift(format!(
                "wrapper takes {} parameters, coroutine takes {}",
                self.decl.args.len(),
                counterpart.args.len()
            )));
        }

        for (pos, (ours, theirs)) in self.decl.args.iter().zip(&counterpart.args).enumerate() {
            let (a, b) = (normalize_type(&ours.ty), normalize_type(&theirs.ty));
            if a != b {
                return Err(drift(format!(
                    "parameter {} (`{}`) has type `{a}`, coroutine expects `{b}`",
                    pos + 1,
                    ours.name
                )));
            }
        }

        Ok(())
    }
}
