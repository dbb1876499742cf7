use std::fs;

use predicates::prelude::*;

mod common;

use rvc::object::Id;

const HELLO_CONTENT: &[u8; 11] = b"Hello World";
const HELLO_SHA1: &str = "5e1c309dae7f45e0f39b1bf3ac3cd9db12e7d689";

// $ echo 'test content' | git hash-object --stdin
const TEST_CONTENT_SHA1: &str = "d670460b4b4aece5915caf5c68d12f560a9fe3e4";

fn init_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    common::rvc()
        .args(&["init", dir.path().to_str().unwrap()])
        .assert()
        .success();
    dir
}

#[test]
fn hashes_and_writes_a_blob() {
    let dir = init_repo();

    let file = dir.path().join("hello.txt");
    fs::write(&file, HELLO_CONTENT).unwrap();

    common::rvc()
        .args(&[
            "hash-object",
            file.to_str().unwrap(),
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(format!("{}\n", HELLO_SHA1));

    let object_path = dir
        .path()
        .join(".rvc/objects")
        .join(&HELLO_SHA1[..2])
        .join(&HELLO_SHA1[2..]);
    assert!(object_path.is_file());
}

#[test]
fn repeat_write_is_idempotent() {
    let dir = init_repo();

    let file = dir.path().join("hello.txt");
    fs::write(&file, HELLO_CONTENT).unwrap();

    let args = [
        "hash-object",
        file.to_str().unwrap(),
        dir.path().to_str().unwrap(),
    ];

    common::rvc().args(&args).assert().success();

    let object_path = dir
        .path()
        .join(".rvc/objects")
        .join(&HELLO_SHA1[..2])
        .join(&HELLO_SHA1[2..]);
    let stored = fs::read(&object_path).unwrap();

    common::rvc()
        .args(&args)
        .assert()
        .success()
        .stdout(format!("{}\n", HELLO_SHA1));
    assert_eq!(fs::read(&object_path).unwrap(), stored);
}

#[test]
fn discovers_repo_from_nested_cwd() {
    let dir = init_repo();
    let nested = dir.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();

    let file = nested.join("content.txt");
    fs::write(&file, b"test content\n").unwrap();

    common::rvc()
        .args(&["hash-object", file.to_str().unwrap()])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(format!("{}\n", TEST_CONTENT_SHA1));

    assert!(dir
        .path()
        .join(".rvc/objects")
        .join(&TEST_CONTENT_SHA1[..2])
        .join(&TEST_CONTENT_SHA1[2..])
        .is_file());
}

#[test]
fn hashes_a_tree_payload() {
    let dir = init_repo();

    let blob_id = Id::from_hex(TEST_CONTENT_SHA1).unwrap();
    let mut payload = b"100644 a.txt\x00".to_vec();
    payload.extend_from_slice(blob_id.as_bytes());

    let file = dir.path().join("tree.bin");
    fs::write(&file, &payload).unwrap();

    common::rvc()
        .args(&[
            "hash-object",
            "-t",
            "tree",
            file.to_str().unwrap(),
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{40}\n$").unwrap());
}

#[test]
fn rejects_malformed_tree_payload() {
    let dir = init_repo();

    // Truncated mid-digest: fewer than 20 bytes after the NUL.
    let mut payload = b"100644 a.txt\x00".to_vec();
    payload.extend_from_slice(&[0x11; 19]);

    let file = dir.path().join("tree.bin");
    fs::write(&file, &payload).unwrap();

    common::rvc()
        .args(&[
            "hash-object",
            "-t",
            "tree",
            file.to_str().unwrap(),
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sha overflow"));
}

#[test]
fn fails_outside_a_repository() {
    let dir = tempfile::tempdir().unwrap();

    let file = dir.path().join("hello.txt");
    fs::write(&file, HELLO_CONTENT).unwrap();

    common::rvc()
        .args(&[
            "hash-object",
            file.to_str().unwrap(),
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no repository found"));
}
