use actix_http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use uuid::Uuid;

use crate::{
    error_chain_fmt,
    service::{MensagemService, MensagemServiceError},
};

///
/// Possible errors that can occur on this route.
///
#[derive(thiserror::Error)]
pub enum DeleteMensagemError {
    /// The path id is not a valid UUID.
    #[error("ID Inválido")]
    InvalidIdError,
    /// The mensagem does not exist. The service's message is the response
    /// body.
    #[error("{0}")]
    DomainError(MensagemServiceError),
    /// An unexpected error has occured while processing the request.
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for DeleteMensagemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for DeleteMensagemError {
    fn status_code(&self) -> StatusCode {
        match *self {
            DeleteMensagemError::InvalidIdError | DeleteMensagemError::DomainError(_) => {
                StatusCode::BAD_REQUEST
            }
            DeleteMensagemError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MensagemServiceError> for DeleteMensagemError {
    fn from(error: MensagemServiceError) -> Self {
        match error {
            MensagemServiceError::StorageError(source) => Self::UnexpectedError(source),
            other => Self::DomainError(other),
        }
    }
}

#[tracing::instrument(name = "Remove a mensagem", skip(service))]
pub async fn delete(
    id: web::Path<String>,
    service: web::Data<dyn MensagemService>,
) -> Result<HttpResponse, DeleteMensagemError> {
    let id = Uuid::parse_str(&id).map_err(|_| DeleteMensagemError::InvalidIdError)?;

    service.remove(id).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("mensagem removida"))
}
