use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::api::{ApiClient, CrearPartidoRequest};
use crate::error::Result;
use crate::models::{Inscrito, Tarjeta};

/// Listings created by the current user, with the rosters viewed so far.
#[derive(Debug, Clone, Default)]
pub struct OwnListingsState {
    pub partidos: Vec<Tarjeta>,
    pub rosters: HashMap<i64, Vec<Inscrito>>,
}

/// Ownership view: the user's own listings plus roster management.
///
/// The backend has no creator-scoped endpoint, so `fetch_own_listings` pulls
/// the full set and keeps the entries whose creator id matches. Roster
/// removal fetches the roster when it is not already held, prunes the held
/// copy optimistically, then re-fetches the listing set so the view
/// converges.
pub struct MatchManager {
    api: ApiClient,
    state: RwLock<OwnListingsState>,
}

impl MatchManager {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RwLock::new(OwnListingsState::default()),
        }
    }

    pub async fn state(&self) -> OwnListingsState {
        self.state.read().await.clone()
    }

    /// Fetch the listing set and keep the ones created by `usuario_id`.
    pub async fn fetch_own_listings(&self, usuario_id: i64) -> Result<Vec<Tarjeta>> {
        let all = self.api.list_partidos().await?;
        let own: Vec<Tarjeta> = all
            .into_iter()
            .filter(|t| t.usuario_id == usuario_id)
            .collect();

        let mut state = self.state.write().await;
        state.partidos = own.clone();
        Ok(own)
    }

    /// Create a listing, then re-fetch the ownership view.
    pub async fn create_listing(&self, req: CrearPartidoRequest) -> Result<()> {
        let usuario_id = req.usuario_id;
        self.api.crear_partido(&req).await?;
        info!("Created listing at '{}' for user {}", req.cancha, usuario_id);

        if let Err(e) = self.fetch_own_listings(usuario_id).await {
            warn!("Post-create refresh failed: {}", e);
        }
        Ok(())
    }

    /// Delete a listing, then re-fetch the ownership view. Confirmation of
    /// the destructive intent is the caller's job.
    pub async fn delete_listing(&self, partido_id: i64, usuario_id: i64) -> Result<()> {
        self.api.borrar_partido(partido_id).await?;
        info!("Deleted listing {}", partido_id);

        let mut state = self.state.write().await;
        state.rosters.remove(&partido_id);
        drop(state);

        if let Err(e) = self.fetch_own_listings(usuario_id).await {
            warn!("Post-delete refresh failed: {}", e);
        }
        Ok(())
    }

    /// Fetch the enrolled-user list for one listing.
    pub async fn roster(&self, tarjeta_id: i64) -> Result<Vec<Inscrito>> {
        let roster = self.api.tarjeta_inscritos(tarjeta_id).await?;

        let mut state = self.state.write().await;
        state.rosters.insert(tarjeta_id, roster.clone());
        Ok(roster)
    }

    /// Remove an enrolled user from a listing (admin-style unenroll, distinct
    /// from a user leaving on their own). The held roster is pruned
    /// optimistically; the listing set is then re-fetched for consistency.
    pub async fn remove_from_roster(
        &self,
        tarjeta_id: i64,
        usuario_id: i64,
        owner_id: i64,
    ) -> Result<Vec<Inscrito>> {
        // Hold the current roster first so the prune below works on real
        // data, not an empty default.
        if !self.state.read().await.rosters.contains_key(&tarjeta_id) {
            self.roster(tarjeta_id).await?;
        }

        self.api.desinscribir(tarjeta_id, usuario_id).await?;
        info!(
            "Removed user {} from listing {} roster",
            usuario_id, tarjeta_id
        );

        let pruned = {
            let mut state = self.state.write().await;
            let roster = state.rosters.entry(tarjeta_id).or_default();
            roster.retain(|i| i.id != usuario_id);
            roster.clone()
        };

        if let Err(e) = self.fetch_own_listings(owner_id).await {
            warn!("Post-removal refresh failed: {}", e);
        }
        Ok(pruned)
    }
}

/// Shared match manager type
pub type SharedMatchManager = Arc<MatchManager>;

pub fn create_shared_match_manager(api: ApiClient) -> SharedMatchManager {
    Arc::new(MatchManager::new(api))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initial_state_is_empty() {
        let manager = MatchManager::new(ApiClient::new("http://localhost:0"));

        let state = manager.state().await;
        assert!(state.partidos.is_empty());
        assert!(state.rosters.is_empty());
    }
}
