//! Route table and request validation.
//!
//! Only `/`, `/view/<title>`, `/edit/<title>` and `/save/<title>` are
//! served. A title must match `^[a-zA-Z0-9]+$`; anything else is a 404.

use std::sync::LazyLock;

use axum::{
    async_trait,
    extract::{Form, FromRequest, FromRequestParts, Multipart, Path, Query, Request},
    http::{header, request::Parts, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use regex::Regex;
use serde::Deserialize;

use crate::errors::WikiError;
use crate::handlers::{handle_edit, handle_root, handle_save, handle_view};
use crate::types::AppState;

static VALID_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("title pattern is valid"));

pub fn is_valid_title(title: &str) -> bool {
    VALID_TITLE.is_match(title)
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handle_root))
        .route("/view/:title", any(handle_view))
        .route("/edit/:title", any(handle_edit))
        .route("/save/:title", any(handle_save))
        .fallback(handle_not_found)
        .with_state(state)
}

async fn handle_not_found() -> WikiError {
    WikiError::NotFound
}

/// A validated page title taken from the last path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for PageTitle
where
    S: Send + Sync,
{
    type Rejection = WikiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(title) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| WikiError::NotFound)?;
        if !is_valid_title(&title) {
            log::debug!("Rejected invalid title '{}'", title);
            return Err(WikiError::NotFound);
        }
        Ok(PageTitle(title))
    }
}

/// Form fields posted by the edit page
#[derive(Debug, Default, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub body: String,
}

/// The `body` field of a save request.
///
/// Read from a multipart or urlencoded body, otherwise from the query
/// string; absent means empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveBody(pub String);

#[async_trait]
impl<S> FromRequest<S> for SaveBody
where
    S: Send + Sync,
{
    type Rejection = WikiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let uri = req.uri().clone();
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| WikiError::FormError(e.body_text()))?;
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| WikiError::FormError(e.body_text()))?
            {
                if field.name() == Some("body") {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| WikiError::FormError(e.body_text()))?;
                    return Ok(SaveBody(text));
                }
            }
            return Ok(SaveBody(query_body(&uri)));
        }

        let is_query_method = req.method() == Method::GET || req.method() == Method::HEAD;
        if is_query_method || content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<SaveForm>::from_request(req, state)
                .await
                .map_err(|e| WikiError::FormError(e.body_text()))?;
            return Ok(SaveBody(form.body));
        }

        log::debug!("Save request without form body ({:?}), reading query", content_type);
        Ok(SaveBody(query_body(req.uri())))
    }
}

fn query_body(uri: &Uri) -> String {
    Query::<SaveForm>::try_from_uri(uri)
        .map(|Query(form)| form.body)
        .unwrap_or_default()
}

/// 302 Found to `location`
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub fn view_path(title: &str) -> String {
    format!("/view/{}", title)
}

pub fn edit_path(title: &str) -> String {
    format!("/edit/{}", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_validation() {
        assert!(is_valid_title("FrontPage"));
        assert!(is_valid_title("abc123"));
        assert!(!is_valid_title(""));
        assert!(!is_valid_title("Front Page"));
        assert!(!is_valid_title("front-page"));
        assert!(!is_valid_title("../etc"));
        assert!(!is_valid_title("Ünicode"));
    }

    #[test]
    fn found_sets_location() {
        let response = found("/view/FrontPage");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/view/FrontPage");
    }
}
