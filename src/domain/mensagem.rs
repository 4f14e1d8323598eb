use chrono::{DateTime, Utc};
use uuid::Uuid;

///
/// A persisted mensagem record. `id` and `data_criacao` are assigned by the
/// service on registration and never change afterwards.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mensagem {
    pub id: Uuid,
    pub usuario: String,
    pub conteudo: String,
    #[serde(rename = "dataCriacao", with = "data_criacao_format")]
    pub data_criacao: DateTime<Utc>,
    pub gostei: i32,
}

/// Validated input for registering a new mensagem.
pub struct NewMensagem {
    pub usuario: Usuario,
    pub conteudo: Conteudo,
}

///
/// Validated input for updating an existing mensagem. Only the conteudo is
/// ever merged onto the stored record; the declared id must match the stored
/// one, and a missing id counts as a mismatch.
///
pub struct UpdateMensagem {
    pub id: Option<Uuid>,
    pub conteudo: Conteudo,
}

///
/// One page of mensagens plus pagination metadata.
///
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Page {
    pub content: Vec<Mensagem>,
    pub number: u32,
    pub size: u32,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

#[derive(Debug)]
pub struct Usuario(String);

impl Usuario {
    pub fn parse(value: String) -> Result<Usuario, String> {
        if validator::validate_length(value.trim(), Some(1), None, None) {
            Ok(Self(value))
        } else {
            Err("O campo usuario é obrigatório".to_string())
        }
    }
}

impl AsRef<str> for Usuario {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Usuario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug)]
pub struct Conteudo(String);

impl Conteudo {
    pub fn parse(value: String) -> Result<Conteudo, String> {
        if validator::validate_length(value.trim(), Some(1), None, None) {
            Ok(Self(value))
        } else {
            Err("O campo conteudo é obrigatório".to_string())
        }
    }
}

impl AsRef<str> for Conteudo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Conteudo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

///
/// Wire format for `dataCriacao`: `yyyy-MM-dd HH:mm:ss.SSSSS`, five
/// fractional digits. chrono has no five-digit specifier, so the fraction is
/// rendered by hand from the nanosecond component.
///
pub mod data_criacao_format {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = format!(
            "{}.{:05}",
            value.format(SECONDS_FORMAT),
            value.nanosecond() / 10_000
        );
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&value, "%Y-%m-%d %H:%M:%S%.f")
            .map_err(serde::de::Error::custom)?;
        Ok(Utc.from_utc_datetime(&naive))
    }
}
