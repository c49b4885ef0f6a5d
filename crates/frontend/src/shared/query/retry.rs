use crate::shared::api::ApiError;

/// Default retry policy of reads. Mutations are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 300,
        }
    }
}

impl RetryPolicy {
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay_ms: 0,
        }
    }

    /// `attempt` is 1-based: the attempt that just failed
    pub fn should_retry(&self, error: &ApiError, attempt: u32) -> bool {
        attempt < self.max_attempts && error.is_transient()
    }

    /// Linear backoff: 300ms, 600ms, ...
    pub fn delay_ms(&self, attempt: u32) -> u32 {
        self.base_delay_ms.saturating_mul(attempt.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transient_errors_retry() {
        let policy = RetryPolicy::default();
        let network = ApiError::Network("connection reset".into());
        let server = ApiError::Server {
            status: 502,
            message: None,
        };
        assert!(policy.should_retry(&network, 1));
        assert!(policy.should_retry(&server, 2));
        assert!(!policy.should_retry(&server, 3));
        assert!(!policy.should_retry(&ApiError::NotFound, 1));
        assert!(!policy.should_retry(&ApiError::Unauthorized, 1));
        assert!(!RetryPolicy::none().should_retry(&network, 1));
    }

    #[test]
    fn test_delay_grows() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_ms(1), 300);
        assert_eq!(policy.delay_ms(2), 600);
    }
}
