use std::fs;
use std::path::Path;
use std::process::Command;

/// Bump and persist the monotonic build counter.
fn next_build_number() -> u64 {
    let path = Path::new("BUILD_NUMBER");
    let current: u64 = fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let next = current + 1;
    fs::write(path, next.to_string()).expect("Failed to write build number");
    next
}

/// Version string from the VERSION file, falling back to the crate default.
fn version() -> String {
    fs::read_to_string("VERSION")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "0.1.0".to_string())
}

/// Short git commit hash, "unknown" outside a checkout.
fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    let profile_label = if profile == "release" {
        "release"
    } else {
        "development"
    };

    println!("cargo:rustc-env=PHOTOVEIL_VERSION={}", version());
    println!("cargo:rustc-env=PHOTOVEIL_BUILD={}", next_build_number());
    println!("cargo:rustc-env=PHOTOVEIL_PROFILE={}", profile_label);
    println!("cargo:rustc-env=PHOTOVEIL_GIT_HASH={}", git_hash());

    println!("cargo:rerun-if-changed=BUILD_NUMBER");
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
