//! Optional-deadline helper.

use std::future::Future;
use std::time::Duration;

use crate::error::MinervaError;

/// Wrap a future with an optional deadline. `None` means wait forever.
pub async fn with_deadline<T>(
    deadline: Option<Duration>,
    future: impl Future<Output = Result<T, MinervaError>>,
) -> Result<T, MinervaError> {
    match deadline {
        None => future.await,
        Some(duration) => match tokio::time::timeout(duration, future).await {
            Ok(result) => result,
            Err(_) => Err(MinervaError::Timeout(duration.as_millis() as u64)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_deadline_passes_through() {
        let result = with_deadline(None, async { Ok(7) }).await.unwrap();
        assert_eq!(result, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_deadline_yields_timeout() {
        let err = with_deadline(Some(Duration::from_millis(50)), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await
        .unwrap_err();
        assert!(matches!(err, MinervaError::Timeout(50)));
    }
}
