use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    /// Raw storage failure. The message is returned to clients as is.
    #[error("{0}")]
    Storage(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::NotFound => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::BadRequest(_) => StatusCode::BAD_REQUEST,
            DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: message.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(DomainError::NotFound, StatusCode::NOT_FOUND, "Not found")]
    #[case(
        DomainError::Validation("Missing email".into()),
        StatusCode::UNPROCESSABLE_ENTITY,
        "Missing email"
    )]
    #[case(
        DomainError::BadRequest("Json deserialize error".into()),
        StatusCode::BAD_REQUEST,
        "Json deserialize error"
    )]
    #[case(
        DomainError::Storage("connection refused".into()),
        StatusCode::INTERNAL_SERVER_ERROR,
        "connection refused"
    )]
    #[actix_web::test]
    async fn maps_error_to_status_and_body(
        #[case] error: DomainError,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let response = error.error_response();
        assert_eq!(response.status(), status);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "error": message }));
    }
}
