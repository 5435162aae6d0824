//! Typed client for the FaltaUno backend REST API.
//!
//! Every method is one request/response round trip. Non-success statuses are
//! mapped to the backend-provided `{ error }` reason when present; the caller
//! decides what to show the user.

use reqwest::Response;
use tracing::debug;

use super::types::{
    AuthResponse, CrearPartidoRequest, ErrorResponse, InscripcionRequest, LoginRequest,
    RegisterRequest,
};
use crate::error::{AppError, Result};
use crate::models::{Inscrito, PartidoJugado, Preferencias, Tarjeta, TarjetaInscrita, Usuario};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response to the backend's reason when it sent one.
    async fn check(resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = match resp.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => None,
        }
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());

        debug!("Backend rejected request ({}): {}", status, message);
        Err(AppError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    // =========================================================================
    // Auth
    // =========================================================================

    pub async fn login(&self, correo: &str, password: &str) -> Result<Usuario> {
        let body = LoginRequest {
            correo: correo.to_string(),
            password: password.to_string(),
        };
        let resp = self.http.post(self.url("/auth/login")).json(&body).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json::<AuthResponse>().await?.usuario)
    }

    pub async fn register(&self, nombre: &str, correo: &str, password: &str) -> Result<Usuario> {
        let body = RegisterRequest {
            nombre: nombre.to_string(),
            correo: correo.to_string(),
            password: password.to_string(),
        };
        let resp = self.http.post(self.url("/auth/register")).json(&body).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json::<AuthResponse>().await?.usuario)
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// Full current set of open listings.
    pub async fn list_tarjetas(&self) -> Result<Vec<Tarjeta>> {
        let resp = self.http.get(self.url("/tarjetas")).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    /// Enrolled users for one listing.
    pub async fn tarjeta_inscritos(&self, tarjeta_id: i64) -> Result<Vec<Inscrito>> {
        let url = self.url(&format!("/tarjetas/{tarjeta_id}/inscritos"));
        let resp = self.http.get(&url).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn inscribir(&self, tarjeta_id: i64, usuario_id: i64) -> Result<()> {
        let url = self.url(&format!("/tarjetas/{tarjeta_id}/inscribir"));
        let body = InscripcionRequest { usuario_id };
        let resp = self.http.post(&url).json(&body).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    pub async fn desinscribir(&self, tarjeta_id: i64, usuario_id: i64) -> Result<()> {
        let url = self.url(&format!("/tarjetas/{tarjeta_id}/desinscribir"));
        let body = InscripcionRequest { usuario_id };
        let resp = self.http.post(&url).json(&body).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    // =========================================================================
    // Own matches
    // =========================================================================

    pub async fn list_partidos(&self) -> Result<Vec<Tarjeta>> {
        let resp = self.http.get(self.url("/partidos")).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn crear_partido(&self, body: &CrearPartidoRequest) -> Result<()> {
        let resp = self.http.post(self.url("/partidos")).json(body).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    pub async fn borrar_partido(&self, partido_id: i64) -> Result<()> {
        let url = self.url(&format!("/partidos/{partido_id}"));
        let resp = self.http.delete(&url).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    // =========================================================================
    // Profile
    // =========================================================================

    pub async fn get_usuario(&self, usuario_id: i64) -> Result<Usuario> {
        let url = self.url(&format!("/usuario/{usuario_id}"));
        let resp = self.http.get(&url).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    /// Full replace of the three preference fields.
    pub async fn update_preferencias(
        &self,
        usuario_id: i64,
        prefs: &Preferencias,
    ) -> Result<()> {
        let url = self.url(&format!("/usuario/{usuario_id}/preferencias"));
        let resp = self.http.put(&url).json(prefs).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    pub async fn usuario_partidos(&self, usuario_id: i64) -> Result<Vec<PartidoJugado>> {
        let url = self.url(&format!("/usuario/{usuario_id}/partidos"));
        let resp = self.http.get(&url).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn tarjetas_inscritas(&self, usuario_id: i64) -> Result<Vec<TarjetaInscrita>> {
        let url = self.url(&format!("/usuario/{usuario_id}/tarjetas-inscritas"));
        let resp = self.http.get(&url).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.url("/tarjetas"), "http://localhost:3000/tarjetas");
    }
}
