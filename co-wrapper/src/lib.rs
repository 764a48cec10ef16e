#![doc = include_str!("../../co-wrapper-codegen/README.md")]

pub mod core {
    pub use co_wrapper_core::*;
}

mod format;

pub use co_wrapper_codegen::scanner;

pub use co_wrapper_codegen::{FuncDecl, GeneratorConfig, ParamDecl, WrapperPlan, generate};
pub use co_wrapper_core::{Error, Formatter, HandleKind, Passthrough, Result};
pub use format::{CLANG_FORMAT_STYLE, ClangFormat};

/// Generate a complete wrapper file from `input`.
///
/// Runs the generator, hands the text to `formatter` and makes sure the
/// result ends with exactly one newline. Nothing is returned unless every
/// declaration was wrapped.
///
/// ```
/// use co_wrapper::{GeneratorConfig, Passthrough, generate_file};
///
/// let input = "int generated_co_wrapper bdrv_flush(BlockDriverState *bs);\n";
/// let file = generate_file(input, &GeneratorConfig::default(), &Passthrough).unwrap();
/// assert!(file.starts_with("/*\n * File is generated by co-wrapper\n"));
/// assert!(file.ends_with("}\n"));
/// ```
pub fn generate_file(
    input: &str,
    config: &GeneratorConfig,
    formatter: &dyn Formatter,
) -> Result<String> {
    let code = generate(input, config)?;
    let mut code = formatter.format(code)?;
    if !code.ends_with('\n') {
        code.push('\n');
    }
    Ok(code)
}
