use actix_http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::{
    error_chain_fmt,
    service::{MensagemService, MensagemServiceError},
};

fn default_page() -> u32 {
    0
}

fn default_size() -> u32 {
    10
}

///
/// Optional pagination query parameters. `size` carries no upper bound.
///
#[derive(serde::Deserialize)]
pub struct Parameters {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_size")]
    size: u32,
}

///
/// Possible errors that can occur on this route.
///
#[derive(thiserror::Error)]
pub enum ListMensagensError {
    /// Invalid pagination parameters were supplied in the request.
    #[error("{0}")]
    ValidationError(String),
    /// An unexpected error has occured while processing the request.
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ListMensagensError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ListMensagensError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ListMensagensError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ListMensagensError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MensagemServiceError> for ListMensagensError {
    fn from(error: MensagemServiceError) -> Self {
        match error {
            MensagemServiceError::StorageError(source) => Self::UnexpectedError(source),
            other => Self::UnexpectedError(anyhow::Error::new(other)),
        }
    }
}

#[tracing::instrument(name = "List mensagens", skip(parameters, service))]
pub async fn list(
    parameters: web::Query<Parameters>,
    service: web::Data<dyn MensagemService>,
) -> Result<HttpResponse, ListMensagensError> {
    if parameters.size == 0 {
        return Err(ListMensagensError::ValidationError(
            "O parâmetro size deve ser maior que zero".to_string(),
        ));
    }

    let pagina = service.list(parameters.page, parameters.size).await?;

    Ok(HttpResponse::Ok().json(pagina))
}
