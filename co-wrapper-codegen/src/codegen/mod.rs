//! Code generation for coroutine wrappers.
//!
//! Emission happens in two parts: a header written once per run, and one
//! self-contained block per validated declaration.

pub mod header;
pub mod utils;
mod wrapper;

use crate::types::*;
use co_wrapper_core::Result;

impl FuncDecl {
    /// Validate the declaration and generate its wrapper block.
    pub fn expand(&self) -> Result<String> {
        Ok(self.validate()?.expand())
    }
}

impl WrapperPlan<'_> {
    /// Generate the wrapper block for an already validated declaration.
    pub fn expand(&self) -> String {
        wrapper::generate_wrapper(self)
    }
}
