pub mod memory;
pub mod postgres;

use uuid::Uuid;

use crate::domain::mensagem::Mensagem;

///
/// Storage gateway for mensagem records. The service layer owns all domain
/// decisions (not-found, id conflicts); implementations only move records in
/// and out of the backing store.
///
#[async_trait::async_trait]
pub trait MensagemRepository: Send + Sync {
    /// Insert the record, or replace the stored one carrying the same id.
    async fn save(&self, mensagem: &Mensagem) -> Result<Mensagem, anyhow::Error>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Mensagem>, anyhow::Error>;

    async fn delete(&self, id: Uuid) -> Result<(), anyhow::Error>;

    /// One page of records ordered by creation instant (id as tie-breaker),
    /// plus the total number of stored records.
    async fn list(&self, page: u32, size: u32) -> Result<(Vec<Mensagem>, u64), anyhow::Error>;
}
