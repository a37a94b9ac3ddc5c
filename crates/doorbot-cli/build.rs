//! Stamps the binary with a version string for `doorbot --version`.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let pkg = env!("CARGO_PKG_VERSION");
    let version = match git_revision() {
        Some(rev) if rev != pkg => format!("{} ({})", pkg, rev),
        _ => pkg.to_string(),
    };

    println!("cargo:rustc-env=DOORBOT_VERSION={}", version);
}

/// `git describe` output without a leading `v`, if git is available.
fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    let described = described.strip_prefix('v').unwrap_or(described);

    (!described.is_empty()).then(|| described.to_string())
}
