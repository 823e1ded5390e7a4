// Retry Accounting
// Counts candidates drawn by the retry-until-success loops

use super::error::{Result, RsaError};

/// Tracks how many candidates a search loop has drawn.
///
/// Without a limit the loop runs until it succeeds. With a limit, drawing
/// one candidate past it fails with [`RsaError::ExhaustedAttempts`].
#[derive(Debug, Clone)]
pub(crate) struct Attempts {
    operation: &'static str,
    limit: Option<u64>,
    used: u64,
}

impl Attempts {
    pub(crate) fn new(operation: &'static str, limit: Option<u64>) -> Self {
        Self {
            operation,
            limit,
            used: 0,
        }
    }

    /// Account for one more candidate.
    pub(crate) fn next(&mut self) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.used >= limit {
                return Err(RsaError::ExhaustedAttempts {
                    operation: self.operation,
                    attempts: self.used,
                });
            }
        }
        self.used += 1;
        Ok(())
    }

    pub(crate) fn used(&self) -> u64 {
        self.used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_never_fails() {
        let mut attempts = Attempts::new("search", None);
        for _ in 0..10_000 {
            attempts.next().unwrap();
        }
        assert_eq!(attempts.used(), 10_000);
    }

    #[test]
    fn test_limit_reached() {
        let mut attempts = Attempts::new("coprime exponent search", Some(3));
        for _ in 0..3 {
            attempts.next().unwrap();
        }
        assert_eq!(
            attempts.next(),
            Err(RsaError::ExhaustedAttempts {
                operation: "coprime exponent search",
                attempts: 3,
            })
        );
    }
}
