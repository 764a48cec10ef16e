//! The preamble written once at the top of every generated file.

/// The generator's own documentation; its copyright notice is carried into
/// every generated file.
const TOOL_DOC: &str = include_str!("../../README.md");

/// Render the copyright notice of `doc` as the body of a C block comment.
///
/// Everything from the last `Copyright` onwards is kept. Non-empty lines are
/// prefixed with ` * `, empty ones become a bare ` *`.
pub fn copyright_block(doc: &str) -> String {
    let notice = doc.rfind("Copyright").map_or(doc, |start| &doc[start..]);
    notice
        .trim()
        .lines()
        .map(|line| {
            if line.is_empty() {
                " *".to_owned()
            } else {
                format!(" * {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate the file header: generation notice, copyright and includes.
///
/// The result does not end with a newline.
pub fn generate_header(generator_name: &str) -> String {
    let copyright = copyright_block(TOOL_DOC);
    format!(
        "/*
 * File is generated by {generator_name}
 *
{copyright}
 */

#include \"qemu/osdep.h\"
#include \"block/coroutines.h\"
#include \"block/block-gen.h\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copyright_starts_at_notice() {
        let doc = "Tool summary.\n\nCopyright (c) 2024 Someone\n\nLicensed as-is.\n";
        assert_eq!(
            copyright_block(doc),
            " * Copyright (c) 2024 Someone\n *\n * Licensed as-is."
        );
    }

    #[test]
    fn doc_without_notice_is_kept_whole() {
        assert_eq!(copyright_block("just text\n"), " * just text");
    }

    #[test]
    fn header_layout() {
        let header = generate_header("co-wrapper");
        let lines: Vec<_> = header.lines().collect();
        assert_eq!(lines[0], "/*");
        assert_eq!(lines[1], " * File is generated by co-wrapper");
        assert_eq!(lines[2], " *");
        assert_eq!(lines[3], " * Copyright (c) 2020 Virtuozzo International GmbH.");
        assert_eq!(
            &lines[lines.len() - 5..],
            [
                " */",
                "",
                "#include \"qemu/osdep.h\"",
                "#include \"block/coroutines.h\"",
                "#include \"block/block-gen.h\"",
            ]
        );
        assert!(!header.ends_with('\n'));
        assert!(lines.iter().all(|l| l.starts_with(" *") || !l.starts_with(' ')));
    }
}
