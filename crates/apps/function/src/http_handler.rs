use common_services::api::gallery::error::GalleryError;
use common_services::api::gallery::interfaces::{CORS_PREFLIGHT_HEADERS, NO_CACHE_HEADERS};
use common_services::api::gallery::service::{get_gallery, replace_gallery};
use common_services::storage::GalleryStore;
use lambda_http::http::header::{CONTENT_TYPE, HeaderValue};
use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Error, Request, Response};
use std::sync::Arc;

pub(crate) struct FunctionState {
    pub store: Arc<dyn GalleryStore>,
    pub expose_error_details: bool,
}

fn with_cors_headers(mut resp: Response<Body>) -> Response<Body> {
    let headers = resp.headers_mut();
    for (name, value) in CORS_PREFLIGHT_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    resp
}

fn json_response(status: StatusCode, body: String) -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .map_err(Box::new)?;
    Ok(resp)
}

fn error_response(error: &GalleryError, include_debug: bool) -> Result<Response<Body>, Error> {
    tracing::error!("{}: {}", error, error.kind());
    let envelope = serde_json::to_string(&error.envelope(include_debug))?;
    json_response(error.status(), envelope)
}

/// Gallery function: the same whole-document GET/POST contract as the long-running server.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<FunctionState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    tracing::info!("Gallery function invoked - Method: {} Path: {}", method, event.uri().path());

    let resp = match *method {
        Method::OPTIONS => Response::builder()
            .status(StatusCode::NO_CONTENT)
            .body(Body::Empty)
            .map_err(Box::new)?,
        Method::GET => match get_gallery(state.store.as_ref()).await {
            Ok(stored) => {
                let mut resp = json_response(StatusCode::OK, stored.raw)?;
                for (name, value) in NO_CACHE_HEADERS {
                    resp.headers_mut()
                        .insert(name, HeaderValue::from_static(value));
                }
                resp
            }
            Err(e) => error_response(&e, state.expose_error_details)?,
        },
        Method::POST => match replace_gallery(state.store.as_ref(), event.body().as_ref()).await {
            Ok(ack) => json_response(StatusCode::OK, serde_json::to_string(&ack)?)?,
            Err(e) => error_response(&e, state.expose_error_details)?,
        },
        _ => Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .body("Method Not Allowed".into())
            .map_err(Box::new)?,
    };

    Ok(with_cors_headers(resp))
}
