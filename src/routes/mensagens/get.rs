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
pub enum GetMensagemError {
    /// The path id is unknown or not a valid UUID. Both cases answer with the
    /// same body, as the API contract demands.
    #[error("ID Inválido")]
    InvalidIdError,
    /// An unexpected error has occured while processing the request.
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for GetMensagemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for GetMensagemError {
    fn status_code(&self) -> StatusCode {
        match *self {
            GetMensagemError::InvalidIdError => StatusCode::BAD_REQUEST,
            GetMensagemError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MensagemServiceError> for GetMensagemError {
    fn from(error: MensagemServiceError) -> Self {
        match error {
            MensagemServiceError::StorageError(source) => Self::UnexpectedError(source),
            _ => Self::InvalidIdError,
        }
    }
}

#[tracing::instrument(name = "Fetch a mensagem", skip(service))]
pub async fn get(
    id: web::Path<String>,
    service: web::Data<dyn MensagemService>,
) -> Result<HttpResponse, GetMensagemError> {
    let id = Uuid::parse_str(&id).map_err(|_| GetMensagemError::InvalidIdError)?;

    let mensagem = service.find(id).await?;

    Ok(HttpResponse::Ok().json(mensagem))
}
