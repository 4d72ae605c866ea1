use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=DETKEY_RUSTC_VERSION");

    if let Ok(v) = env::var("DETKEY_RUSTC_VERSION") {
        let v = v.trim();
        if !v.is_empty() {
            println!("cargo:rustc-env=DETKEY_RUSTC_VERSION={v}");
            return;
        }
    }

    let Some(version) = rustc_version() else {
        return;
    };
    println!("cargo:rustc-env=DETKEY_RUSTC_VERSION={version}");
}

fn rustc_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let out = Command::new(rustc).arg("--version").output().ok()?;
    if !out.status.success() {
        return None;
    }
    let s = String::from_utf8_lossy(&out.stdout).trim().to_string();
    if s.is_empty() { None } else { Some(s) }
}
