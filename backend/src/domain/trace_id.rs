//! Correlation identifier carried by every directory request.
//!
//! The identifier lives in a Tokio task-local for the lifetime of the
//! request future, so error constructors and log lines can pick it up
//! without it being passed around. Task-locals do not follow
//! `tokio::spawn` or `spawn_blocking`; wrap such work in [`TraceId::scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Header name used on both requests and responses.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// UUID identifying one request through logs and error bodies.
///
/// ```
/// use backend::TraceId;
///
/// fn log_prefix() -> String {
///     TraceId::current().map_or_else(|| "-".to_owned(), |id| id.to_string())
/// }
///
/// assert_eq!(log_prefix(), "-");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reuse a caller-supplied identifier when it parses, otherwise mint one.
    #[must_use]
    pub(crate) fn adopt_or_generate(candidate: Option<&str>) -> Self {
        candidate
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_else(Self::generate)
    }

    /// Identifier of the request being served on this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `self` installed as the current identifier.
    ///
    /// ```
    /// use backend::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let id: TraceId = "6f1c2a44-9d1e-4f3b-a0b4-5b0d6b9e2c11".parse().expect("uuid");
    /// assert_eq!(id.scope(async { TraceId::current() }).await, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut>(self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(self, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.as_hyphenated().fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn display_is_hyphenated_lowercase() {
        let id: TraceId = "6F1C2A449D1E4F3BA0B45B0D6B9E2C11".parse().expect("uuid");
        assert_eq!(id.to_string(), "6f1c2a44-9d1e-4f3b-a0b4-5b0d6b9e2c11");
    }

    #[tokio::test]
    async fn scoped_future_sees_identifier() {
        let id = TraceId::generate();
        assert_eq!(id.scope(async { TraceId::current() }).await, Some(id));
    }

    #[tokio::test]
    async fn nothing_in_scope_outside_a_request() {
        assert_eq!(TraceId::current(), None);
    }

    #[test]
    fn adopts_valid_inbound_identifier() {
        let adopted = TraceId::adopt_or_generate(Some(" 6f1c2a44-9d1e-4f3b-a0b4-5b0d6b9e2c11 "));
        assert_eq!(adopted.to_string(), "6f1c2a44-9d1e-4f3b-a0b4-5b0d6b9e2c11");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("req-42"))]
    fn mints_fresh_identifier_otherwise(#[case] candidate: Option<&str>) {
        let minted = TraceId::adopt_or_generate(candidate);
        assert_ne!(Some(minted.to_string().as_str()), candidate);
        assert!(minted.to_string().parse::<TraceId>().is_ok());
    }
}
