//! Type definitions for the wrapper generator.
//!
//! This module contains the data structures a declaration goes through:
//! - ParamDecl: one `<type> <name>` parameter
//! - FuncDecl: a marked wrapper declaration as found in the input
//! - WrapperPlan: a declaration that passed validation, with everything
//!   the emitter derives from it resolved up front

use co_wrapper_core::HandleKind;

/// A single parameter declaration such as `int64_t offset`.
///
/// `ty` keeps the declaration text verbatim up to the identifier, so it
/// always ends with a space or `*` (`"BlockDriverState *"`, `"int64_t "`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    pub decl: String,
    pub ty: String,
    pub name: String,
}

/// A function declaration carrying the wrapper marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub return_type: String,
    pub name: String,
    pub args: Vec<ParamDecl>,
}

impl FuncDecl {
    /// Render every parameter with `f` and join the results with `, `.
    pub fn gen_list(&self, f: impl Fn(&ParamDecl) -> String) -> String {
        self.join_args(", ", f)
    }

    /// Render every parameter with `f`, one per line.
    pub fn gen_block(&self, f: impl Fn(&ParamDecl) -> String) -> String {
        self.join_args("\n", f)
    }

    fn join_args(&self, sep: &str, f: impl Fn(&ParamDecl) -> String) -> String {
        self.args.iter().map(f).collect::<Vec<_>>().join(sep)
    }
}

/// A validated declaration, ready for emission.
#[derive(Debug, Clone)]
pub struct WrapperPlan<'a> {
    pub decl: &'a FuncDecl,
    /// Name of the hand-written coroutine, e.g. `bdrv_co_preadv`.
    pub coroutine: String,
    pub handle: HandleKind,
    /// C expression for the `BlockDriverState` the poll loop drives.
    pub owner: String,
}
