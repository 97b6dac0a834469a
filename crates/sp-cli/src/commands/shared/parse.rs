use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value through serde (`-` accepted for `_`).
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use sp_core::enums::{OAuthProvider, TaskStatus};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let status: TaskStatus = parse_enum("completed", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::Completed);
    }

    #[test]
    fn parses_case_insensitively() {
        let provider: OAuthProvider = parse_enum("GitHub", "provider").expect("should parse");
        assert_eq!(provider, OAuthProvider::Github);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<TaskStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }
}
