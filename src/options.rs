/// Configures the underlying HTTP client.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Client-wide request timeout in milliseconds. Applies to every call.
    pub timeout_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 500_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ClientOptions;

    #[test]
    fn default_timeout_is_long() {
        assert_eq!(ClientOptions::default().timeout_ms, 500_000);
    }
}
