use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn co_wrapper() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("co-wrapper"))
}

#[test]
fn wraps_declarations_from_stdin() {
    co_wrapper()
        .pipe_stdin(fixture("block-io.h"))
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("File is generated by co-wrapper"))
        .stdout(predicate::str::contains("#include \"block/block-gen.h\""))
        .stdout(predicate::str::contains("BdrvCoPreadv"))
        .stdout(predicate::str::contains("bdrv_co_preadv_entry"))
        .stdout(predicate::str::contains("child->bs"))
        .stdout(predicate::str::contains("bdrv_poll_co(&s.poll_state)"));
}

#[test]
fn empty_input_yields_header_only() {
    co_wrapper()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copyright (c) 2020 Virtuozzo International GmbH."))
        .stdout(predicate::str::contains("Wrappers for").not());
}

#[test]
fn malformed_declaration_fails_without_output() {
    co_wrapper()
        .pipe_stdin(fixture("malformed.h"))
        .unwrap()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("bdrv_invalidate_cache"));
}

#[test]
fn unsupported_signature_fails() {
    co_wrapper()
        .write_stdin("int generated_co_wrapper bdrv_co_flush(BlockDriverState *bs);\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unsupported signature of `bdrv_co_flush`"));
}

#[test]
fn help_mentions_stdin() {
    co_wrapper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stdin"));
}
