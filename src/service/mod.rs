use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    domain::mensagem::{Mensagem, NewMensagem, Page, UpdateMensagem},
    error_chain_fmt,
    storage::MensagemRepository,
};

///
/// Domain outcomes of the mensagem service. `NotFoundError` and
/// `IdMismatchError` are expected, recoverable results; their display texts
/// are part of the API contract and surface verbatim as response bodies.
///
#[derive(thiserror::Error)]
pub enum MensagemServiceError {
    #[error("Mensagem não encontrada")]
    NotFoundError,
    #[error("Mensagem atualizada não apresenta o ID correto")]
    IdMismatchError,
    #[error(transparent)]
    StorageError(#[from] anyhow::Error),
}

impl std::fmt::Debug for MensagemServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

///
/// Business rules around persisting mensagens. The only component allowed to
/// decide between not-found, id-mismatch and success.
///
#[async_trait::async_trait]
pub trait MensagemService: Send + Sync {
    /// Assign a fresh id and creation instant, persist, return the stored
    /// record. Client-supplied ids never reach this point.
    async fn register(&self, nova_mensagem: NewMensagem)
        -> Result<Mensagem, MensagemServiceError>;

    async fn find(&self, id: Uuid) -> Result<Mensagem, MensagemServiceError>;

    /// Look up the stored record, require the declared id to match, then
    /// merge the conteudo only. Usuario and data_criacao stay untouched.
    async fn update(
        &self,
        id: Uuid,
        atualizacao: UpdateMensagem,
    ) -> Result<Mensagem, MensagemServiceError>;

    async fn remove(&self, id: Uuid) -> Result<(), MensagemServiceError>;

    async fn list(&self, page: u32, size: u32) -> Result<Page, MensagemServiceError>;
}

pub struct RepositoryMensagemService {
    repository: Arc<dyn MensagemRepository>,
}

impl RepositoryMensagemService {
    pub fn new(repository: Arc<dyn MensagemRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl MensagemService for RepositoryMensagemService {
    #[tracing::instrument(name = "Register a new mensagem", skip(self, nova_mensagem))]
    async fn register(
        &self,
        nova_mensagem: NewMensagem,
    ) -> Result<Mensagem, MensagemServiceError> {
        let mensagem = Mensagem {
            id: Uuid::new_v4(),
            usuario: nova_mensagem.usuario.as_ref().to_owned(),
            conteudo: nova_mensagem.conteudo.as_ref().to_owned(),
            data_criacao: Utc::now(),
            gostei: 0,
        };

        let stored = self
            .repository
            .save(&mensagem)
            .await
            .context("Failed to persist the new mensagem.")?;

        Ok(stored)
    }

    #[tracing::instrument(name = "Look up a mensagem", skip(self))]
    async fn find(&self, id: Uuid) -> Result<Mensagem, MensagemServiceError> {
        self.repository
            .find_by_id(id)
            .await
            .context("Failed to look up the mensagem.")?
            .ok_or(MensagemServiceError::NotFoundError)
    }

    #[tracing::instrument(name = "Update an existing mensagem", skip(self, atualizacao))]
    async fn update(
        &self,
        id: Uuid,
        atualizacao: UpdateMensagem,
    ) -> Result<Mensagem, MensagemServiceError> {
        let mut mensagem = self.find(id).await?;

        if atualizacao.id != Some(mensagem.id) {
            return Err(MensagemServiceError::IdMismatchError);
        }

        mensagem.conteudo = atualizacao.conteudo.as_ref().to_owned();

        let stored = self
            .repository
            .save(&mensagem)
            .await
            .context("Failed to persist the updated mensagem.")?;

        Ok(stored)
    }

    #[tracing::instrument(name = "Remove a mensagem", skip(self))]
    async fn remove(&self, id: Uuid) -> Result<(), MensagemServiceError> {
        self.find(id).await?;

        self.repository
            .delete(id)
            .await
            .context("Failed to delete the mensagem.")?;

        Ok(())
    }

    #[tracing::instrument(name = "List mensagens", skip(self))]
    async fn list(&self, page: u32, size: u32) -> Result<Page, MensagemServiceError> {
        let (content, total_elements) = self
            .repository
            .list(page, size)
            .await
            .context("Failed to list mensagens.")?;

        let total_pages = if size == 0 {
            0
        } else {
            ((total_elements + size as u64 - 1) / size as u64) as u32
        };

        Ok(Page {
            content,
            number: page,
            size,
            total_elements,
            total_pages,
        })
    }
}
