use std::{collections::HashMap, sync::RwLock};

use anyhow::anyhow;
use uuid::Uuid;

use super::MensagemRepository;
use crate::domain::mensagem::Mensagem;

///
/// Storage gateway backed by a process-local map. Used by the test suite and
/// by deployments with `storage: memory`.
///
pub struct InMemoryMensagemRepository {
    rows: RwLock<HashMap<Uuid, Mensagem>>,
}

impl InMemoryMensagemRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryMensagemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MensagemRepository for InMemoryMensagemRepository {
    async fn save(&self, mensagem: &Mensagem) -> Result<Mensagem, anyhow::Error> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| anyhow!("Mensagem store lock was poisoned."))?;

        rows.insert(mensagem.id, mensagem.clone());

        Ok(mensagem.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Mensagem>, anyhow::Error> {
        let rows = self
            .rows
            .read()
            .map_err(|_| anyhow!("Mensagem store lock was poisoned."))?;

        Ok(rows.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<(), anyhow::Error> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| anyhow!("Mensagem store lock was poisoned."))?;

        rows.remove(&id);

        Ok(())
    }

    async fn list(&self, page: u32, size: u32) -> Result<(Vec<Mensagem>, u64), anyhow::Error> {
        let rows = self
            .rows
            .read()
            .map_err(|_| anyhow!("Mensagem store lock was poisoned."))?;

        let mut mensagens: Vec<Mensagem> = rows.values().cloned().collect();
        mensagens.sort_by(|a, b| {
            a.data_criacao
                .cmp(&b.data_criacao)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = mensagens.len() as u64;
        let start = page as usize * size as usize;
        let content = mensagens
            .into_iter()
            .skip(start)
            .take(size as usize)
            .collect();

        Ok((content, total))
    }
}
