//! Request/response bodies for the FaltaUno backend.

use serde::{Deserialize, Serialize};

use crate::models::Usuario;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub correo: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub nombre: String,
    pub correo: String,
    pub password: String,
}

/// Successful auth responses wrap the user record.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub usuario: Usuario,
}

/// Rejected requests carry `{ "error": "..." }` when the backend has a reason.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

/// Body for enroll/unenroll posts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InscripcionRequest {
    pub usuario_id: i64,
}

/// Body for `POST /partidos`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrearPartidoRequest {
    pub cancha: String,
    pub lugar: String,
    pub dia: String,
    pub hora: String,
    pub jugadores_faltantes: u32,
    pub usuario_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inscripcion_request_uses_wire_names() {
        let body = InscripcionRequest { usuario_id: 5 };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "usuarioId": 5 }));
    }

    #[test]
    fn test_crear_partido_request_uses_wire_names() {
        let body = CrearPartidoRequest {
            cancha: "Grün FC".to_string(),
            lugar: "Padre Canavery 1351".to_string(),
            dia: "Viernes 3 de octubre".to_string(),
            hora: "20:00".to_string(),
            jugadores_faltantes: 2,
            usuario_id: 7,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["jugadoresFaltantes"], 2);
        assert_eq!(json["usuarioId"], 7);
        assert_eq!(json["cancha"], "Grün FC");
    }

    #[test]
    fn test_error_response_tolerates_missing_reason() {
        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());

        let body: ErrorResponse =
            serde_json::from_str(r#"{"error": "Ya estás inscripto"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Ya estás inscripto"));
    }
}
