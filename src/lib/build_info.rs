//! Build metadata captured at compile time by `build.rs`.

/// Git commit hash of the build, or "unknown" outside a git checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("PETFINDER_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}
