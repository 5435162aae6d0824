// src/models.rs
use serde::{Deserialize, Serialize};

/// Authenticated user record, also the shape persisted in the session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dias_disponibles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horarios_disponibles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barrios_preferidos: Option<String>,
}

/// A posted match needing players ("tarjeta").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tarjeta {
    pub id: i64,
    pub nombre: String,
    pub direccion: String,
    /// Free-text day descriptor, e.g. "Sabado 18 de octubre".
    pub dia: String,
    /// Free-text time descriptor, e.g. "18:00".
    pub hora: String,
    pub jugadores_faltantes: u32,
    pub usuario_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
    /// Enrolled users, embedded in the listing response when present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inscritos: Vec<Inscrito>,
}

impl Tarjeta {
    /// Zero open slots means the match is complete.
    pub fn is_complete(&self) -> bool {
        self.jugadores_faltantes == 0
    }
}

/// A user enrolled in a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inscrito {
    pub id: i64,
    pub nombre: String,
}

/// History entry for a match the user already played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartidoJugado {
    pub id: i64,
    pub fecha: String,
    pub ubicacion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resultado: Option<String>,
}

/// Profile-side projection of a listing the user joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TarjetaInscrita {
    pub id: i64,
    pub nombre: String,
    pub direccion: String,
    pub dia: String,
    pub hora: String,
    pub tarjeta_id: i64,
}

/// The three free-text preference fields, sent as a full replace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferencias {
    pub dias_disponibles: String,
    pub horarios_disponibles: String,
    pub barrios_preferidos: String,
}
