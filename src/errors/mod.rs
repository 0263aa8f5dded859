use std::{fmt, io};
use axum::{http::StatusCode, response::{IntoResponse, Response}};

/// Custom error types for the wiki application
#[derive(Debug)]
pub enum WikiError {
    Io(io::Error),
    /// Any failure to read a page file; missing and unreadable are not told apart
    PageNotFound { title: String, source: io::Error },
    NotFound,
    TemplateError(String),
    /// A save request whose form body could not be decoded
    FormError(String),
    ConfigError(String),
}

impl fmt::Display for WikiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WikiError::Io(e) => write!(f, "{}", e),
            WikiError::PageNotFound { title, source } => {
                write!(f, "page '{}' could not be loaded: {}", title, source)
            }
            WikiError::NotFound => write!(f, "404 page not found"),
            WikiError::TemplateError(e) => write!(f, "Template error: {}", e),
            WikiError::FormError(e) => write!(f, "Form error: {}", e),
            WikiError::ConfigError(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for WikiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WikiError::Io(e) => Some(e),
            WikiError::PageNotFound { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for WikiError {
    fn from(err: io::Error) -> Self {
        WikiError::Io(err)
    }
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        let status = match &self {
            WikiError::NotFound | WikiError::PageNotFound { .. } => StatusCode::NOT_FOUND,
            WikiError::Io(_)
            | WikiError::TemplateError(_)
            | WikiError::FormError(_)
            | WikiError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn io_error_keeps_raw_text() {
        let err = WikiError::from(io::Error::new(ErrorKind::PermissionDenied, "permission denied"));
        assert_eq!(err.to_string(), "permission denied");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn status_mapping() {
        assert_eq!(WikiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            WikiError::TemplateError("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WikiError::FormError("bad boundary".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let missing = WikiError::PageNotFound {
            title: "Nope".into(),
            source: io::Error::new(ErrorKind::NotFound, "no such file"),
        };
        assert!(missing.to_string().contains("Nope"));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }
}
