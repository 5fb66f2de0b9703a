//! Request correlation middleware.
//!
//! Every request runs inside a [`TraceId`] scope and a `request` span. A
//! valid UUID in an inbound `trace-id` header is kept so callers can stitch
//! their own logs to ours; anything else is replaced with a fresh one. The
//! identifier is echoed on the response and a completion event records the
//! status and latency.

use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, info, info_span, warn};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware factory; wrap the app with it once.
///
/// ```
/// use actix_web::App;
/// use backend::Trace;
///
/// let _app = App::new().wrap(Trace);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TracedService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TracedService {
            inner: Rc::new(service),
        }))
    }
}

#[doc(hidden)]
pub struct TracedService<S> {
    inner: Rc<S>,
}

fn inbound_trace_id(req: &ServiceRequest) -> TraceId {
    let candidate = req
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    TraceId::adopt_or_generate(candidate)
}

fn stamp<B>(res: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(error) => warn!(%error, "trace id is not a valid header value"),
    }
}

impl<S, B> Service<ServiceRequest> for TracedService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = inbound_trace_id(&req);
        let span = info_span!(
            "request",
            %trace_id,
            method = %req.method(),
            path = %req.path()
        );
        let inner = Rc::clone(&self.inner);
        let started = Instant::now();

        let handled = async move {
            let mut res = inner.call(req).await?;
            stamp(&mut res, trace_id);
            info!(
                status = res.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis(),
                "request completed"
            );
            Ok(res)
        };
        Box::pin(trace_id.scope(handled.instrument(span)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error as DomainError;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use rstest::rstest;

    async fn echo_current() -> HttpResponse {
        match TraceId::current() {
            Some(id) => HttpResponse::Ok().body(id.to_string()),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    async fn reject() -> Result<HttpResponse, DomainError> {
        Err(DomainError::invalid_request("limit must be between 1 and 50"))
    }

    async fn traced_call(
        request: actix_test::TestRequest,
    ) -> (actix_web::dev::ServiceResponse, String) {
        let app = actix_test::init_service(
            App::new()
                .wrap(Trace)
                .route("/echo", web::get().to(echo_current))
                .route("/reject", web::get().to(reject)),
        )
        .await;
        let res = actix_test::call_service(&app, request.to_request()).await;
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("trace-id header on every response");
        (res, header)
    }

    #[actix_web::test]
    async fn handler_sees_the_echoed_identifier() {
        let (res, header) = traced_call(actix_test::TestRequest::get().uri("/echo")).await;
        let body = actix_test::read_body(res).await;
        assert_eq!(std::str::from_utf8(&body).expect("utf8"), header);
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    #[actix_web::test]
    async fn unusable_inbound_identifier_is_replaced(#[case] inbound: &str) {
        let (_, header) = traced_call(
            actix_test::TestRequest::get()
                .uri("/echo")
                .insert_header((TRACE_ID_HEADER, inbound)),
        )
        .await;
        assert_ne!(header, inbound);
        assert!(header.parse::<TraceId>().is_ok());
    }

    #[actix_web::test]
    async fn valid_inbound_identifier_is_kept() {
        let inbound = "0b9a3c1e-2f4d-4e6a-8b7c-9d0e1f2a3b4c";
        let (_, header) = traced_call(
            actix_test::TestRequest::get()
                .uri("/echo")
                .insert_header((TRACE_ID_HEADER, inbound)),
        )
        .await;
        assert_eq!(header, inbound);
    }

    #[actix_web::test]
    async fn error_body_carries_the_same_identifier() {
        let (res, header) = traced_call(actix_test::TestRequest::get().uri("/reject")).await;
        let body: DomainError = actix_test::read_body_json(res).await;
        assert_eq!(body.trace_id(), Some(header.as_str()));
    }
}
