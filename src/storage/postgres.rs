use anyhow::Context;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::MensagemRepository;
use crate::domain::mensagem::Mensagem;

///
/// Storage gateway backed by the `mensagens` table. Queries are bound at
/// runtime so the crate builds without a live database.
///
pub struct PostgresMensagemRepository {
    pool: PgPool,
}

impl PostgresMensagemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MensagemRow {
    id: Uuid,
    usuario: String,
    conteudo: String,
    data_criacao: DateTime<Utc>,
    gostei: i32,
}

impl From<MensagemRow> for Mensagem {
    fn from(row: MensagemRow) -> Self {
        Self {
            id: row.id,
            usuario: row.usuario,
            conteudo: row.conteudo,
            data_criacao: row.data_criacao,
            gostei: row.gostei,
        }
    }
}

#[async_trait::async_trait]
impl MensagemRepository for PostgresMensagemRepository {
    #[tracing::instrument(name = "Saving a mensagem to the database", skip(self, mensagem))]
    async fn save(&self, mensagem: &Mensagem) -> Result<Mensagem, anyhow::Error> {
        let row = sqlx::query_as::<_, MensagemRow>(
            r#"
            INSERT INTO mensagens (id, usuario, conteudo, data_criacao, gostei)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET usuario = EXCLUDED.usuario,
                conteudo = EXCLUDED.conteudo,
                gostei = EXCLUDED.gostei
            RETURNING id, usuario, conteudo, data_criacao, gostei
            "#,
        )
        .bind(mensagem.id)
        .bind(&mensagem.usuario)
        .bind(&mensagem.conteudo)
        .bind(mensagem.data_criacao)
        .bind(mensagem.gostei)
        .fetch_one(&self.pool)
        .await
        .context("Failed to save the mensagem to the database.")?;

        Ok(row.into())
    }

    #[tracing::instrument(name = "Fetching a mensagem from the database", skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Mensagem>, anyhow::Error> {
        let row = sqlx::query_as::<_, MensagemRow>(
            r#"
            SELECT id, usuario, conteudo, data_criacao, gostei
            FROM mensagens
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch the mensagem from the database.")?;

        Ok(row.map(Into::into))
    }

    #[tracing::instrument(name = "Deleting a mensagem from the database", skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), anyhow::Error> {
        sqlx::query(
            r#"
            DELETE FROM mensagens
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .context("Failed to delete the mensagem from the database.")?;

        Ok(())
    }

    #[tracing::instrument(name = "Listing mensagens from the database", skip(self))]
    async fn list(&self, page: u32, size: u32) -> Result<(Vec<Mensagem>, u64), anyhow::Error> {
        let rows = sqlx::query_as::<_, MensagemRow>(
            r#"
            SELECT id, usuario, conteudo, data_criacao, gostei
            FROM mensagens
            ORDER BY data_criacao, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(size as i64)
        .bind(page as i64 * size as i64)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list mensagens from the database.")?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mensagens")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count mensagens in the database.")?;

        Ok((rows.into_iter().map(Into::into).collect(), total as u64))
    }
}
