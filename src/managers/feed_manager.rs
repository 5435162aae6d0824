use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::error::{AppError, Result};
use crate::models::Tarjeta;

/// Which trigger caused a feed fetch. A first load blocks the caller behind
/// the `loading` flag; later refreshes only raise the `refreshing` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    Initial,
    Background,
}

/// Snapshot of the feed, replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub tarjetas: Vec<Tarjeta>,
    pub loading: bool,
    pub refreshing: bool,
}

/// Synchronizes the open-listing feed with the backend.
///
/// Every fetch replaces the whole local list; a failed fetch leaves the
/// previous list untouched. Mutations (enroll/unenroll) never patch locally,
/// they re-fetch so the list converges on the backend's post-mutation state.
pub struct FeedManager {
    api: ApiClient,
    state: RwLock<FeedState>,
}

impl FeedManager {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RwLock::new(FeedState::default()),
        }
    }

    pub async fn state(&self) -> FeedState {
        self.state.read().await.clone()
    }

    pub async fn listings(&self) -> Vec<Tarjeta> {
        self.state.read().await.tarjetas.clone()
    }

    /// Fetch the full listing set and replace the local list.
    pub async fn fetch_listings(&self, kind: RefreshKind) -> Result<Vec<Tarjeta>> {
        {
            let mut state = self.state.write().await;
            match kind {
                RefreshKind::Initial => state.loading = true,
                RefreshKind::Background => state.refreshing = true,
            }
        }

        let result = self.api.list_tarjetas().await;

        let mut state = self.state.write().await;
        state.loading = false;
        state.refreshing = false;

        match result {
            Ok(tarjetas) => {
                debug!("Feed refreshed: {} listings", tarjetas.len());
                state.tarjetas = tarjetas.clone();
                Ok(tarjetas)
            }
            Err(e) => {
                warn!("Failed to refresh feed: {}", e);
                Err(e)
            }
        }
    }

    /// Enroll `usuario_id` into a listing, then re-fetch for convergence.
    pub async fn enroll(&self, tarjeta_id: i64, usuario_id: i64) -> Result<()> {
        if let Some(tarjeta) = self.find(tarjeta_id).await {
            ensure_enrollable(&tarjeta, usuario_id)?;
        }

        self.api.inscribir(tarjeta_id, usuario_id).await?;
        info!("User {} enrolled in listing {}", usuario_id, tarjeta_id);

        if let Err(e) = self.fetch_listings(RefreshKind::Background).await {
            warn!("Post-enroll refresh failed: {}", e);
        }
        Ok(())
    }

    /// Leave a listing, then re-fetch for convergence.
    pub async fn unenroll(&self, tarjeta_id: i64, usuario_id: i64) -> Result<()> {
        self.api.desinscribir(tarjeta_id, usuario_id).await?;
        info!("User {} left listing {}", usuario_id, tarjeta_id);

        if let Err(e) = self.fetch_listings(RefreshKind::Background).await {
            warn!("Post-unenroll refresh failed: {}", e);
        }
        Ok(())
    }

    async fn find(&self, tarjeta_id: i64) -> Option<Tarjeta> {
        self.state
            .read()
            .await
            .tarjetas
            .iter()
            .find(|t| t.id == tarjeta_id)
            .cloned()
    }
}

/// Shared feed manager type
pub type SharedFeedManager = Arc<FeedManager>;

pub fn create_shared_feed_manager(api: ApiClient) -> SharedFeedManager {
    Arc::new(FeedManager::new(api))
}

/// Client-side enrollment gate: a complete listing is not enrollable by
/// anyone, and a creator never enrolls in their own listing. Both checks run
/// before any network call.
pub fn ensure_enrollable(tarjeta: &Tarjeta, usuario_id: i64) -> Result<()> {
    if tarjeta.is_complete() {
        return Err(AppError::validation(
            "tarjeta",
            "El partido ya está completo",
        ));
    }
    if tarjeta.usuario_id == usuario_id {
        return Err(AppError::validation(
            "tarjeta",
            "No podés inscribirte en tu propio partido",
        ));
    }
    Ok(())
}

/// Case-insensitive substring filter over venue name and address. An empty
/// query matches everything.
pub fn filter_listings<'a>(tarjetas: &'a [Tarjeta], query: &str) -> Vec<&'a Tarjeta> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return tarjetas.iter().collect();
    }

    tarjetas
        .iter()
        .filter(|t| {
            t.nombre.to_lowercase().contains(&query)
                || t.direccion.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initial_state_is_empty_and_idle() {
        let manager = FeedManager::new(ApiClient::new("http://localhost:0"));

        let state = manager.state().await;
        assert!(state.tarjetas.is_empty());
        assert!(!state.loading);
        assert!(!state.refreshing);
        assert!(manager.listings().await.is_empty());
    }

    fn tarjeta(id: i64, nombre: &str, direccion: &str, faltan: u32, creador: i64) -> Tarjeta {
        Tarjeta {
            id,
            nombre: nombre.to_string(),
            direccion: direccion.to_string(),
            dia: "Sabado 18 de octubre".to_string(),
            hora: "18:00".to_string(),
            jugadores_faltantes: faltan,
            usuario_id: creador,
            usuario: None,
            inscritos: Vec::new(),
        }
    }

    fn sample() -> Vec<Tarjeta> {
        vec![
            tarjeta(1, "Ciudad (Ex-Muni)", "Miguel B. Sanchez 1045", 2, 7),
            tarjeta(2, "Grün FC", "Padre Canavery 1351", 1, 7),
            tarjeta(3, "La Cancha de Pablo", "Av. Cabildo 2040", 3, 9),
        ]
    }

    #[test]
    fn test_empty_query_matches_all() {
        let tarjetas = sample();
        assert_eq!(filter_listings(&tarjetas, "").len(), 3);
        assert_eq!(filter_listings(&tarjetas, "   ").len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_on_both_fields() {
        let tarjetas = sample();

        let by_name = filter_listings(&tarjetas, "grün");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 2);

        let by_address = filter_listings(&tarjetas, "CABILDO");
        assert_eq!(by_address.len(), 1);
        assert_eq!(by_address[0].id, 3);
    }

    #[test]
    fn test_filter_returns_subset() {
        let tarjetas = sample();
        let hits = filter_listings(&tarjetas, "ca");
        for hit in &hits {
            assert!(tarjetas.iter().any(|t| t.id == hit.id));
        }
        assert!(filter_listings(&tarjetas, "no existe").is_empty());
    }

    #[test]
    fn test_complete_listing_is_not_enrollable() {
        let full = tarjeta(1, "Ciudad", "Sanchez 1045", 0, 7);
        // Not even for a stranger.
        assert!(ensure_enrollable(&full, 99).is_err());
    }

    #[test]
    fn test_creator_cannot_enroll_in_own_listing() {
        let own = tarjeta(1, "Ciudad", "Sanchez 1045", 2, 7);
        assert!(ensure_enrollable(&own, 7).is_err());
        assert!(ensure_enrollable(&own, 8).is_ok());
    }
}
