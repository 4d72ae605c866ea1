//! Binary that builds keys for the pinned fixtures, round-trips one through a
//! `.key` sidecar, and prints deterministic output lines for cross-process
//! verification.
//!
//! Usage: `key_fixture`
//! Output: five lines, each `key=value`:
//!   `key_digest`=sha256:...
//!   `redacted_digest`=sha256:...
//!   `emit_options_digest`=sha256:...
//!   `key_bytes`=N
//!   `roundtrip`=ok

use detkey_compilation::model::emit_options::EmitOptions;
use detkey_compilation::{build_emit_options_key, build_key, AdditionalInputs};
use detkey_harness::{read_key_file, verify_key_file, write_key_file};
use detkey_kernel::redaction::RedactionOptions;
use lock_tests::fixtures::{hello_world_snapshot, pinned_options, runtime_reference};

fn main() {
    let mut snapshot = hello_world_snapshot();
    snapshot.references.push(runtime_reference("/refs/System.Runtime.dll"));
    let inputs = AdditionalInputs {
        emit_options: Some(EmitOptions::default()),
        ..AdditionalInputs::default()
    };

    let precise = pinned_options(RedactionOptions::empty());
    let key = build_key(&snapshot, &inputs, &precise).expect("build_key failed");
    let redacted = build_key(&snapshot, &inputs, &pinned_options(RedactionOptions::all()))
        .expect("build_key (redacted) failed");
    let emit = build_emit_options_key(inputs.emit_options.as_ref(), &precise);

    let dir = std::env::temp_dir().join(format!("detkey_key_fixture_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create temp dir failed");
    let output = dir.join("App.dll");
    write_key_file(&output, &key).expect("write_key_file failed");
    let stored = read_key_file(&output).expect("read_key_file failed");
    verify_key_file(&output, &key).expect("verify_key_file failed");
    let _ = std::fs::remove_dir_all(&dir);

    let roundtrip = if stored == key.as_str() { "ok" } else { "MISMATCH" };

    println!("key_digest={}", key.digest());
    println!("redacted_digest={}", redacted.digest());
    println!("emit_options_digest={}", emit.digest());
    println!("key_bytes={}", key.len());
    println!("roundtrip={roundtrip}");
}
