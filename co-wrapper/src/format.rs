//! Optional beautification with `clang-format`.

use co_wrapper_core::{Error, Formatter, Result};
use log::debug;
use std::io::{self, Write};
use std::process::{Command, Output, Stdio};
use std::thread;

/// Style passed to `clang-format`: four-space indent, function braces on
/// their own line, includes left in the order they were written.
pub const CLANG_FORMAT_STYLE: &str = "{IndentWidth: 4, BraceWrapping: {AfterFunction: true}, \
                                      BreakBeforeBraces: Custom, SortIncludes: false, \
                                      MaxEmptyLinesToKeep: 2}";

/// Runs `clang-format` over the generated code.
///
/// When the program cannot be found the code is returned unchanged. Any
/// other failure is an error: a formatter that exists but misbehaves is not
/// something to paper over.
#[derive(Debug, Clone)]
pub struct ClangFormat {
    program: String,
}

impl ClangFormat {
    pub fn new() -> Self {
        Self::with_program("clang-format")
    }

    /// Use a specific executable instead of `clang-format` from `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ClangFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for ClangFormat {
    fn format(&self, code: String) -> Result<String> {
        let spawned = Command::new(&self.program)
            .arg(format!("-style={CLANG_FORMAT_STYLE}"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("{} not found, leaving output unformatted", self.program);
                return Ok(code);
            }
            Err(err) => return Err(err.into()),
        };

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::FormatterFailed("stdin was not captured".to_owned()))?;

        // Feed stdin from a second thread so a large file cannot fill both pipes.
        let output = thread::scope(|scope| -> Result<Output> {
            let writer = scope.spawn(move || stdin.write_all(code.as_bytes()));
            let output = child.wait_with_output()?;
            match writer.join() {
                Ok(Ok(())) => {}
                // The exit status below explains why the formatter stopped reading.
                Ok(Err(err)) if err.kind() == io::ErrorKind::BrokenPipe => {}
                Ok(Err(err)) => return Err(err.into()),
                Err(_) => return Err(Error::FormatterFailed("stdin writer panicked".to_owned())),
            }
            Ok(output)
        })?;

        if !output.status.success() {
            return Err(Error::FormatterFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        debug!("formatted output with {}", self.program);
        String::from_utf8(output.stdout)
            .map_err(|err| Error::FormatterFailed(format!("output is not UTF-8: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_passes_code_through() {
        let formatter = ClangFormat::with_program("co-wrapper-no-such-formatter");
        let code = "int x;".to_owned();
        assert_eq!(formatter.format(code.clone()).unwrap(), code);
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_is_an_error() {
        let formatter = ClangFormat::with_program("false");
        assert!(matches!(
            formatter.format("int x;".to_owned()),
            Err(Error::FormatterFailed(_))
        ));
    }

    #[test]
    fn style_keeps_include_order() {
        assert!(CLANG_FORMAT_STYLE.contains("SortIncludes: false"));
        assert!(CLANG_FORMAT_STYLE.starts_with('{') && CLANG_FORMAT_STYLE.ends_with('}'));
    }
}
