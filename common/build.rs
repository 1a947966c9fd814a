// Resolve the git commit hash before the build and expose the build version
// to the crate as an environment variable.

use std::process::Command;

fn commit_hash() -> String {
    if let Some(hash) = option_env!("SBT_COMMIT_HASH") {
        return hash.chars().take(7).collect();
    }

    // SAFETY: Build script - a missing git binary or repository falls back to "unknown"
    match Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    }
}

fn main() {
    let build_version = format!("{}-{}", env!("CARGO_PKG_VERSION"), commit_hash());
    println!("cargo:rerun-if-env-changed=SBT_COMMIT_HASH");
    println!("cargo:rustc-env=BUILD_VERSION={build_version}");
}
