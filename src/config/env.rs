use std::path::Path;

/// Load environment variables from `.env` files.
///
/// `.env.local` (not committed) takes precedence over `.env`; real system
/// environment variables always win because dotenvy never overwrites an
/// existing variable.
pub fn load_dotenv(project_root: &Path) {
    let _ = dotenvy::from_path(project_root.join(".env.local"));
    let _ = dotenvy::from_path(project_root.join(".env"));
}

/// Get an environment variable with a default value.
///
/// # Example
/// ```
/// use dualist::config::env;
///
/// let port: u16 = env("SERVER_PORT", 8080);
/// let host = env("SERVER_HOST", "127.0.0.1".to_string());
/// ```
pub fn env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Get an optional environment variable.
pub fn env_optional<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_falls_back_to_default() {
        let port: u16 = env("DUALIST_TEST_UNSET_PORT", 4321);
        assert_eq!(port, 4321);
    }

    #[test]
    fn env_parses_set_values() {
        std::env::set_var("DUALIST_TEST_SET_PORT", "9000");
        let port: u16 = env("DUALIST_TEST_SET_PORT", 4321);
        assert_eq!(port, 9000);
    }

    #[test]
    fn env_optional_is_none_when_unset() {
        let value: Option<u16> = env_optional("DUALIST_TEST_NEVER_SET");
        assert_eq!(value, None);
    }
}
