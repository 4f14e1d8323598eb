use std::convert::{TryFrom, TryInto};

use actix_http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use uuid::Uuid;

use crate::{
    domain::mensagem::{Conteudo, UpdateMensagem},
    error_chain_fmt,
    service::{MensagemService, MensagemServiceError},
};

///
/// Contains the request body for updating a mensagem.
///
/// A `usuario` field in the body is deliberately not deserialized: updates
/// never touch the stored usuario.
///
#[derive(serde::Deserialize)]
pub struct BodyData {
    id: Option<Uuid>,
    conteudo: String,
}

///
/// Try to convert [`BodyData`] into a validated instance of
/// [`UpdateMensagem`].
///
impl TryFrom<BodyData> for UpdateMensagem {
    type Error = String;

    fn try_from(value: BodyData) -> Result<Self, Self::Error> {
        let conteudo = Conteudo::parse(value.conteudo)?;

        Ok(Self {
            id: value.id,
            conteudo,
        })
    }
}

///
/// Possible errors that can occur on this route.
///
#[derive(thiserror::Error)]
pub enum UpdateMensagemError {
    /// The path id is not a valid UUID.
    #[error("ID Inválido")]
    InvalidIdError,
    /// Invalid data was supplied in the request.
    #[error("{0}")]
    ValidationError(String),
    /// The mensagem does not exist, or the body id does not match the path
    /// id. The service's message is the response body.
    #[error("{0}")]
    DomainError(MensagemServiceError),
    /// An unexpected error has occured while processing the request.
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for UpdateMensagemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for UpdateMensagemError {
    fn status_code(&self) -> StatusCode {
        match *self {
            UpdateMensagemError::InvalidIdError
            | UpdateMensagemError::ValidationError(_)
            | UpdateMensagemError::DomainError(_) => StatusCode::BAD_REQUEST,
            UpdateMensagemError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MensagemServiceError> for UpdateMensagemError {
    fn from(error: MensagemServiceError) -> Self {
        match error {
            MensagemServiceError::StorageError(source) => Self::UnexpectedError(source),
            other => Self::DomainError(other),
        }
    }
}

#[tracing::instrument(name = "Update an existing mensagem", skip(body, service))]
pub async fn update(
    id: web::Path<String>,
    body: web::Json<BodyData>,
    service: web::Data<dyn MensagemService>,
) -> Result<HttpResponse, UpdateMensagemError> {
    let id = Uuid::parse_str(&id).map_err(|_| UpdateMensagemError::InvalidIdError)?;

    let atualizacao: UpdateMensagem = body
        .0
        .try_into()
        .map_err(UpdateMensagemError::ValidationError)?;

    let mensagem = service.update(id, atualizacao).await?;

    Ok(HttpResponse::Accepted().json(mensagem))
}
