use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::error::{AppError, Result};
use crate::models::Usuario;
use crate::state::SessionStore;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Manages the session lifecycle between anonymous and authenticated.
///
/// Login/register validate locally before touching the network, persist the
/// returned user record on success, and leave the session anonymous on
/// failure. A failed persistence write is logged and otherwise ignored; the
/// session continues in-memory for that run.
pub struct SessionManager {
    api: ApiClient,

    /// On-disk record enabling skip-login on relaunch
    store: SessionStore,

    /// Currently authenticated user, if any
    current: RwLock<Option<Usuario>>,
}

impl SessionManager {
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        Self {
            api,
            store,
            current: RwLock::new(None),
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn current_user(&self) -> Option<Usuario> {
        self.current.read().await.clone()
    }

    /// Current user, or `NotAuthenticated` for commands that need one.
    pub async fn require_user(&self) -> Result<Usuario> {
        self.current_user().await.ok_or(AppError::NotAuthenticated)
    }

    pub async fn login(&self, correo: &str, password: &str) -> Result<Usuario> {
        validate_login(correo, password)?;

        let usuario = self.api.login(correo.trim(), password).await?;
        info!("Logged in as '{}' (id {})", usuario.nombre, usuario.id);
        self.persist_and_set(usuario).await
    }

    pub async fn register(
        &self,
        nombre: &str,
        correo: &str,
        password: &str,
        confirm: &str,
    ) -> Result<Usuario> {
        validate_register(nombre, correo, password, confirm)?;

        let usuario = self
            .api
            .register(nombre.trim(), correo.trim(), password)
            .await?;
        info!("Registered as '{}' (id {})", usuario.nombre, usuario.id);
        self.persist_and_set(usuario).await
    }

    /// Restore the persisted session at startup.
    ///
    /// An absent record is the normal anonymous state; an unreadable one is
    /// logged and treated the same. Neither surfaces an error to the user.
    pub async fn load_stored_session(&self) -> Option<Usuario> {
        match self.store.load().await {
            Ok(Some(usuario)) => {
                debug!("Restored session for '{}' (id {})", usuario.nombre, usuario.id);
                *self.current.write().await = Some(usuario.clone());
                Some(usuario)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Could not read stored session: {}", e);
                None
            }
        }
    }

    /// Erase the persisted record and clear the in-memory session. Always
    /// succeeds from the caller's perspective, including when the record was
    /// already absent.
    pub async fn logout(&self) {
        if let Err(e) = self.store.clear().await {
            warn!("Failed to clear stored session: {}", e);
        }
        *self.current.write().await = None;
        info!("Session closed");
    }

    async fn persist_and_set(&self, usuario: Usuario) -> Result<Usuario> {
        if let Err(e) = self.store.save(&usuario).await {
            // Non-fatal: the session continues in-memory only.
            warn!("Failed to persist session: {}", e);
        }
        *self.current.write().await = Some(usuario.clone());
        Ok(usuario)
    }
}

/// Shared session manager type
pub type SharedSessionManager = Arc<SessionManager>;

pub fn create_shared_session_manager(
    api: ApiClient,
    store: SessionStore,
) -> SharedSessionManager {
    Arc::new(SessionManager::new(api, store))
}

/// Local format checks for login, run before any network call.
pub fn validate_login(correo: &str, password: &str) -> Result<()> {
    validate_correo(correo)?;
    validate_password(password)
}

/// Local format checks for registration, run before any network call.
pub fn validate_register(
    nombre: &str,
    correo: &str,
    password: &str,
    confirm: &str,
) -> Result<()> {
    if nombre.trim().is_empty() {
        return Err(AppError::validation("nombre", "El nombre es obligatorio"));
    }
    validate_correo(correo)?;
    validate_password(password)?;
    if password != confirm {
        return Err(AppError::validation(
            "confirmacion",
            "Las contraseñas no coinciden",
        ));
    }
    Ok(())
}

fn validate_correo(correo: &str) -> Result<()> {
    let correo = correo.trim();
    if correo.is_empty() {
        return Err(AppError::validation(
            "correo",
            "El correo electrónico es obligatorio",
        ));
    }
    if !EMAIL_RE.is_match(correo) {
        return Err(AppError::validation(
            "correo",
            "El formato del correo electrónico no es válido",
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(AppError::validation(
            "password",
            "La contraseña es obligatoria",
        ));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(
            "password",
            "La contraseña debe tener al menos 6 caracteres",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(dir: &std::path::Path) -> SessionManager {
        SessionManager::new(
            ApiClient::new("http://localhost:0"),
            SessionStore::new(dir.to_str().unwrap()),
        )
    }

    fn usuario() -> Usuario {
        Usuario {
            id: 7,
            nombre: "Juan Juanes".to_string(),
            correo: "juan@example.com".to_string(),
            dias_disponibles: None,
            horarios_disponibles: None,
            barrios_preferidos: None,
        }
    }

    #[tokio::test]
    async fn test_startup_without_stored_session_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager(dir.path());

        assert!(manager.load_stored_session().await.is_none());
        assert!(!manager.is_authenticated().await);
        assert!(matches!(
            manager.require_user().await,
            Err(AppError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_stored_session_is_restored_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_str().unwrap());
        store.save(&usuario()).await.unwrap();

        let manager = manager(dir.path());
        assert_eq!(manager.load_stored_session().await, Some(usuario()));
        assert!(manager.is_authenticated().await);
        assert_eq!(manager.require_user().await.unwrap().id, 7);
    }

    #[tokio::test]
    async fn test_unreadable_session_file_stays_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_str().unwrap());
        tokio::fs::write(store.path(), "not json").await.unwrap();

        let manager = manager(dir.path());
        // Silent failure: no error surfaces, the session is just anonymous.
        assert!(manager.load_stored_session().await.is_none());
        assert!(!manager.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_nothing_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager(dir.path());

        manager.logout().await;
        manager.logout().await;
        assert!(!manager.is_authenticated().await);

        let store = SessionStore::new(dir.path().to_str().unwrap());
        assert_eq!(store.load().await.unwrap(), None);
    }

    fn field_of(err: AppError) -> &'static str {
        match err {
            AppError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_credentials_pass() {
        assert!(validate_login("juan@example.com", "secreta").is_ok());
    }

    #[test]
    fn test_empty_email_is_rejected() {
        assert_eq!(field_of(validate_login("", "secreta").unwrap_err()), "correo");
        assert_eq!(
            field_of(validate_login("   ", "secreta").unwrap_err()),
            "correo"
        );
    }

    #[test]
    fn test_malformed_emails_are_rejected() {
        for correo in ["juan", "juan@", "@example.com", "juan@example", "a b@c.d"] {
            assert_eq!(
                field_of(validate_login(correo, "secreta").unwrap_err()),
                "correo",
                "{correo} should be rejected"
            );
        }
    }

    #[test]
    fn test_short_password_is_rejected() {
        assert_eq!(
            field_of(validate_login("juan@example.com", "corta").unwrap_err()),
            "password"
        );
        assert_eq!(
            field_of(validate_login("juan@example.com", "").unwrap_err()),
            "password"
        );
    }

    #[test]
    fn test_register_requires_name_and_matching_confirmation() {
        assert_eq!(
            field_of(validate_register(" ", "juan@example.com", "secreta", "secreta").unwrap_err()),
            "nombre"
        );
        assert_eq!(
            field_of(
                validate_register("Juan", "juan@example.com", "secreta", "distinta").unwrap_err()
            ),
            "confirmacion"
        );
        assert!(validate_register("Juan", "juan@example.com", "secreta", "secreta").is_ok());
    }
}
