//! Extractors whose rejections use the [`AppError`] envelope.
//!
//! Axum's own `Json` and `Path` reject with plain-text bodies; these
//! wrappers route the rejection through `From<...> for AppError` so every
//! error the API returns has the same JSON shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters. A segment that fails to parse answers 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
