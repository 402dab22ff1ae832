pub const DEFAULT_PROFILE: &str = "default";

/// Settings profile name, falling back to `default` when blank.
pub fn resolve_profile(requested: &str) -> String {
    match requested.trim() {
        "" => DEFAULT_PROFILE.to_string(),
        name => name.to_string(),
    }
}
