use std::convert::{TryFrom, TryInto};

use actix_http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::{
    domain::mensagem::{Conteudo, NewMensagem, Usuario},
    error_chain_fmt,
    service::{MensagemService, MensagemServiceError},
};

///
/// Contains the request body for registering a new mensagem.
///
/// A client-supplied id is deliberately not deserialized: the service always
/// assigns its own.
///
#[derive(serde::Deserialize)]
pub struct BodyData {
    usuario: String,
    conteudo: String,
}

///
/// Try to convert [`BodyData`] into a validated instance of [`NewMensagem`].
///
impl TryFrom<BodyData> for NewMensagem {
    type Error = String;

    fn try_from(value: BodyData) -> Result<Self, Self::Error> {
        let usuario = Usuario::parse(value.usuario)?;
        let conteudo = Conteudo::parse(value.conteudo)?;

        Ok(Self { usuario, conteudo })
    }
}

///
/// Possible errors that can occur on this route.
///
#[derive(thiserror::Error)]
pub enum CreateMensagemError {
    /// Invalid data was supplied in the request.
    #[error("{0}")]
    ValidationError(String),
    /// An unexpected error has occured while processing the request.
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for CreateMensagemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for CreateMensagemError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CreateMensagemError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CreateMensagemError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MensagemServiceError> for CreateMensagemError {
    fn from(error: MensagemServiceError) -> Self {
        match error {
            MensagemServiceError::StorageError(source) => Self::UnexpectedError(source),
            other => Self::UnexpectedError(anyhow::Error::new(other)),
        }
    }
}

#[tracing::instrument(name = "Register a new mensagem", skip(body, service))]
pub async fn create(
    body: web::Json<BodyData>,
    service: web::Data<dyn MensagemService>,
) -> Result<HttpResponse, CreateMensagemError> {
    let nova_mensagem: NewMensagem = body
        .0
        .try_into()
        .map_err(CreateMensagemError::ValidationError)?;

    let mensagem = service.register(nova_mensagem).await?;

    Ok(HttpResponse::Created().json(mensagem))
}
