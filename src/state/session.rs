use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::Usuario;

/// File name of the persisted session record inside the state directory.
pub const SESSION_FILE: &str = "sesion.json";

/// On-disk store for the authenticated-user record that enables skip-login
/// on relaunch. Exactly one file, holding one serialized `Usuario`.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(state_path: &str) -> Self {
        Self {
            path: Path::new(state_path).join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    /// Read the stored user, if any. A missing file is not an error.
    pub async fn load(&self) -> Result<Option<Usuario>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let usuario =
                    serde_json::from_str(&content).map_err(|e| AppError::SessionParse {
                        path: self.path_string(),
                        source: e,
                    })?;
                Ok(Some(usuario))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::SessionLoad {
                path: self.path_string(),
                source: e,
            }),
        }
    }

    /// Save the user record atomically (temp file, then rename).
    pub async fn save(&self, usuario: &Usuario) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }

        let content = serde_json::to_string_pretty(usuario)?;
        let temp_path = self.path.with_extension("json.tmp");

        tokio::fs::write(&temp_path, &content)
            .await
            .map_err(|e| AppError::SessionSave {
                path: self.path_string(),
                source: e,
            })?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| AppError::SessionSave {
                path: self.path_string(),
                source: e,
            })?;

        Ok(())
    }

    /// Remove the stored record. Removing an already-absent file succeeds.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::SessionSave {
                path: self.path_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario() -> Usuario {
        Usuario {
            id: 7,
            nombre: "Juan Juanes".to_string(),
            correo: "juan@example.com".to_string(),
            dias_disponibles: Some("Sabados".to_string()),
            horarios_disponibles: None,
            barrios_preferidos: None,
        }
    }

    #[tokio::test]
    async fn test_load_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_str().unwrap());

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_str().unwrap());

        store.save(&usuario()).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, Some(usuario()));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_str().unwrap());

        store.save(&usuario()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_str().unwrap());

        tokio::fs::write(store.path(), "not json").await.unwrap();
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, AppError::SessionParse { .. }));
    }
}
