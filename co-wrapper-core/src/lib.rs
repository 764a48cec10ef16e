//! Conventions shared by the generator and its drivers.
//!
//! The block layer names every coroutine `bdrv_co_<op>` and every blocking
//! entry point `bdrv_<op>`. The generator derives one name from the other and
//! never looks any further, so the prefixes below are the whole contract
//! between hand-written coroutines and generated bridges.

use std::io;

/// Prefix every wrapped function must carry.
pub const WRAPPER_PREFIX: &str = "bdrv_";

/// Prefix of the hand-written coroutine a wrapper forwards to.
pub const COROUTINE_PREFIX: &str = "bdrv_co_";

/// The only return type a wrapper may declare.
pub const STATUS_TYPE: &str = "int";

/// Marker placed between the return type and the name of a wrapper declaration.
pub const WRAPPER_MARKER: &str = "generated_co_wrapper";

/// Marker carried by coroutine declarations.
pub const COROUTINE_MARKER: &str = "coroutine_fn";

/// Derive the coroutine name from a wrapper name.
///
/// Returns `None` when `name` does not carry [`WRAPPER_PREFIX`].
///
/// ```
/// assert_eq!(
///     co_wrapper_core::coroutine_name("bdrv_preadv").as_deref(),
///     Some("bdrv_co_preadv")
/// );
/// ```
pub fn coroutine_name(name: &str) -> Option<String> {
    name.strip_prefix(WRAPPER_PREFIX)
        .map(|rest| format!("{COROUTINE_PREFIX}{rest}"))
}

/// Shape of the first parameter, which tells the poll loop which
/// `BlockDriverState` to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// `BlockDriverState *`: the parameter is the handle.
    Direct,
    /// `BdrvChild *`: the handle is reached through `->bs`.
    Child,
}

impl HandleKind {
    /// Resolve a parameter type, as written in the declaration, to a handle shape.
    pub fn from_type(ty: &str) -> Option<Self> {
        match ty {
            "BlockDriverState *" => Some(Self::Direct),
            "BdrvChild *" => Some(Self::Child),
            _ => None,
        }
    }

    /// C expression yielding the owning `BlockDriverState` for a parameter named `ident`.
    pub fn owner_expr(self, ident: &str) -> String {
        match self {
            Self::Direct => ident.to_owned(),
            Self::Child => format!("{ident}->bs"),
        }
    }

    /// The parameter type text this shape is declared with.
    pub const fn type_text(self) -> &'static str {
        match self {
            Self::Direct => "BlockDriverState *",
            Self::Child => "BdrvChild *",
        }
    }
}

/// Everything that can abort a generator run.
///
/// All variants except [`Error::Io`] describe a broken annotation in the
/// input; none of them is recoverable and the run emits nothing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter fragment has no `<type> <name>` split.
    #[error("malformed declaration of `{function}`: wrong parameter declaration \"{fragment}\"")]
    MalformedDeclaration { function: String, fragment: String },

    /// A declaration breaks the naming or typing rules of wrappers.
    #[error("unsupported signature of `{function}`: {reason}")]
    UnsupportedSignature { function: String, reason: String },

    /// A wrapper does not match the coroutine it forwards to.
    #[error("`{function}` does not match `{counterpart}`: {reason}")]
    SignatureDrift {
        function: String,
        counterpart: String,
        reason: String,
    },

    /// The formatter was found but did not succeed.
    #[error("formatter failed: {0}")]
    FormatterFailed(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A pass over the complete generated text.
pub trait Formatter {
    fn format(&self, code: String) -> Result<String>;
}

/// Formatter that returns the code untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn format(&self, code: String) -> Result<String> {
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coroutine_name_swaps_prefix() {
        assert_eq!(coroutine_name("bdrv_pwritev").as_deref(), Some("bdrv_co_pwritev"));
        assert_eq!(coroutine_name("bdrv_x").as_deref(), Some("bdrv_co_x"));
        assert_eq!(coroutine_name("blk_preadv"), None);
    }

    #[test]
    fn handle_kind_resolution() {
        assert_eq!(HandleKind::from_type("BlockDriverState *"), Some(HandleKind::Direct));
        assert_eq!(HandleKind::from_type("BdrvChild *"), Some(HandleKind::Child));
        assert_eq!(HandleKind::from_type("BlockDriverState* "), None);
        assert_eq!(HandleKind::from_type("BlockBackend *"), None);
    }

    #[test]
    fn owner_expressions() {
        assert_eq!(HandleKind::Direct.owner_expr("bs"), "bs");
        assert_eq!(HandleKind::Direct.owner_expr("target"), "target");
        assert_eq!(HandleKind::Child.owner_expr("child"), "child->bs");
    }

    #[test]
    fn type_text_round_trips() {
        for kind in [HandleKind::Direct, HandleKind::Child] {
            assert_eq!(HandleKind::from_type(kind.type_text()), Some(kind));
        }
    }

    #[test]
    fn passthrough_is_identity() {
        let code = "int x;\n".to_owned();
        assert_eq!(Passthrough.format(code.clone()).unwrap(), code);
    }
}
