//! Request extractors for note routes.
//!
//! Both extractors reject with `ApiError`, so malformed input always
//! produces a JSON 400 instead of axum's plain-text rejections.

use axum::{
    Form,
    extract::{FromRequest, FromRequestParts, Multipart, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use notes_core::{NoteFields, NoteId};
use serde::Deserialize;

use crate::error::{ApiError, from_rejection};

/// Raw form input; every field is optional until checked.
#[derive(Debug, Default, Deserialize)]
struct NoteFormInput {
    title: Option<String>,
    body: Option<String>,
    status: Option<String>,
}

impl NoteFormInput {
    /// Require all three fields, reporting the first one missing.
    fn into_fields(self) -> Result<NoteFields, ApiError> {
        let title = self.title.ok_or(ApiError::MissingField("title"))?;
        let body = self.body.ok_or(ApiError::MissingField("body"))?;
        let status = self.status.ok_or(ApiError::MissingField("status"))?;
        Ok(NoteFields::new(title, body, status))
    }
}

/// Note fields read from a `application/x-www-form-urlencoded` or
/// `multipart/form-data` body.
///
/// `title`, `body` and `status` must all be present; empty values are
/// accepted and unknown fields are ignored.
#[derive(Debug)]
pub struct NoteForm(pub NoteFields);

impl<S> FromRequest<S> for NoteForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let input = if is_multipart(&req) {
            read_multipart(req, state).await?
        } else {
            let Form(input) = Form::<NoteFormInput>::from_request(req, state)
                .await
                .map_err(|rejection| from_rejection(rejection.status(), rejection.body_text()))?;
            input
        };

        input.into_fields().map(Self)
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

async fn read_multipart<S>(req: Request, state: &S) -> Result<NoteFormInput, ApiError>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|rejection| from_rejection(rejection.status(), rejection.body_text()))?;

    let mut input = NoteFormInput::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| from_rejection(e.status(), e.body_text()))?
    {
        let slot = match field.name() {
            Some("title") => &mut input.title,
            Some("body") => &mut input.body,
            Some("status") => &mut input.status,
            _ => continue,
        };
        let text = field
            .text()
            .await
            .map_err(|e| from_rejection(e.status(), e.body_text()))?;
        *slot = Some(text);
    }

    Ok(input)
}

/// The `{id}` path segment of note routes, parsed as a `NoteId`.
#[derive(Debug)]
pub struct NoteIdPath(pub NoteId);

impl<S> FromRequestParts<S> for NoteIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| from_rejection(rejection.status(), rejection.body_text()))?;

        raw.parse::<NoteId>()
            .map(Self)
            .map_err(|_| ApiError::BadRequest(format!("Invalid note id: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, StatusCode};

    fn form_request(body: &'static str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/note")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_form_with_all_fields() {
        let req = form_request("title=Buy+milk&body=2%25%2C+whole&status=open");
        let NoteForm(fields) = NoteForm::from_request(req, &()).await.unwrap();
        assert_eq!(fields, NoteFields::new("Buy milk", "2%, whole", "open"));
    }

    #[tokio::test]
    async fn test_form_accepts_empty_values_and_ignores_extras() {
        let req = form_request("title=&body=&status=&colour=red");
        let NoteForm(fields) = NoteForm::from_request(req, &()).await.unwrap();
        assert_eq!(fields, NoteFields::new("", "", ""));
    }

    #[tokio::test]
    async fn test_form_reports_first_missing_field() {
        let req = form_request("title=t&status=s");
        let err = NoteForm::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingField("body")));

        let req = form_request("");
        let err = NoteForm::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingField("title")));
    }

    #[tokio::test]
    async fn test_form_wrong_content_type_is_bad_request() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/note")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"title":"t"}"#))
            .unwrap();
        let err = NoteForm::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_multipart_form() {
        let body = "--XyZ\r\n\
            Content-Disposition: form-data; name=\"title\"\r\n\r\n\
            Buy milk\r\n\
            --XyZ\r\n\
            Content-Disposition: form-data; name=\"body\"\r\n\r\n\
            2%, whole\r\n\
            --XyZ\r\n\
            Content-Disposition: form-data; name=\"status\"\r\n\r\n\
            open\r\n\
            --XyZ--\r\n";
        let req = Request::builder()
            .method(Method::POST)
            .uri("/note")
            .header(CONTENT_TYPE, "multipart/form-data; boundary=XyZ")
            .body(Body::from(body))
            .unwrap();
        let NoteForm(fields) = NoteForm::from_request(req, &()).await.unwrap();
        assert_eq!(fields, NoteFields::new("Buy milk", "2%, whole", "open"));
    }
}
