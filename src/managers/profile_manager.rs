use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{PartidoJugado, Preferencias, TarjetaInscrita, Usuario};
use crate::schedule;

/// Everything the profile view shows: the user record, the played-match
/// history, and the enrolled listings split into upcoming vs. past.
#[derive(Debug, Clone)]
pub struct Profile {
    pub usuario: Usuario,
    pub historial: Vec<PartidoJugado>,
    pub proximas: Vec<TarjetaInscrita>,
    pub pasadas: Vec<TarjetaInscrita>,
}

impl Profile {
    pub fn preferencias(&self) -> Preferencias {
        Preferencias {
            dias_disponibles: self.usuario.dias_disponibles.clone().unwrap_or_default(),
            horarios_disponibles: self.usuario.horarios_disponibles.clone().unwrap_or_default(),
            barrios_preferidos: self.usuario.barrios_preferidos.clone().unwrap_or_default(),
        }
    }
}

/// Fetches and edits the user profile.
pub struct ProfileManager {
    api: ApiClient,
}

impl ProfileManager {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the user record, match history and enrolled listings, splitting
    /// the latter by the local date heuristic.
    pub async fn load_profile(&self, usuario_id: i64) -> Result<Profile> {
        let usuario = self.api.get_usuario(usuario_id).await?;
        let historial = self.api.usuario_partidos(usuario_id).await?;
        let inscritas = self.api.tarjetas_inscritas(usuario_id).await?;

        let now = Local::now().naive_local();
        let (pasadas, proximas) = partition_by_schedule(inscritas, now);

        Ok(Profile {
            usuario,
            historial,
            proximas,
            pasadas,
        })
    }

    /// Replace the three preference fields, then reload the profile.
    pub async fn save_preferences(
        &self,
        usuario_id: i64,
        prefs: Preferencias,
    ) -> Result<Profile> {
        self.api.update_preferencias(usuario_id, &prefs).await?;
        info!("Preferences updated for user {}", usuario_id);
        self.load_profile(usuario_id).await
    }
}

/// Shared profile manager type
pub type SharedProfileManager = Arc<ProfileManager>;

pub fn create_shared_profile_manager(api: ApiClient) -> SharedProfileManager {
    Arc::new(ProfileManager::new(api))
}

/// Split enrolled listings into (past, upcoming) by their day/time
/// descriptors. Unparseable descriptors land on the upcoming side.
pub fn partition_by_schedule(
    tarjetas: Vec<TarjetaInscrita>,
    now: NaiveDateTime,
) -> (Vec<TarjetaInscrita>, Vec<TarjetaInscrita>) {
    tarjetas
        .into_iter()
        .partition(|t| schedule::is_past(&t.dia, &t.hora, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn inscrita(id: i64, dia: &str, hora: &str) -> TarjetaInscrita {
        TarjetaInscrita {
            id,
            nombre: "Grün FC".to_string(),
            direccion: "Padre Canavery 1351".to_string(),
            dia: dia.to_string(),
            hora: hora.to_string(),
            tarjeta_id: id,
        }
    }

    #[test]
    fn test_partition_splits_on_the_schedule_heuristic() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());

        let (pasadas, proximas) = partition_by_schedule(
            vec![
                inscrita(1, "Martes 3 de junio", "20:00"),
                inscrita(2, "Viernes 20 de junio", "20:00"),
                inscrita(3, "sin fecha", "20:00"),
            ],
            now,
        );

        assert_eq!(pasadas.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(proximas.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3]);
    }
}
