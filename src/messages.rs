// src/messages.rs
//
// User-facing copy, in the backend's locale. Errors pick the backend's own
// reason when it sent one and fall back to these generic lines otherwise.

use crate::error::AppError;

pub fn login_success(nombre: &str) -> String {
    format!("¡Hola, {}! Sesión iniciada correctamente.", nombre)
}

pub fn register_success(nombre: &str) -> String {
    format!("¡Bienvenido, {}! Tu cuenta fue creada.", nombre)
}

pub fn logout_done() -> &'static str {
    "Sesión cerrada."
}

pub fn not_authenticated() -> &'static str {
    "No hay sesión activa. Iniciá sesión con `faltauno login`."
}

pub fn login_fallback() -> &'static str {
    "Error al iniciar sesión"
}

pub fn register_fallback() -> &'static str {
    "Error al registrar usuario"
}

pub fn feed_fallback() -> &'static str {
    "No se pudieron cargar los partidos"
}

pub fn enroll_fallback() -> &'static str {
    "No se pudo completar la inscripción"
}

pub fn unenroll_fallback() -> &'static str {
    "No se pudo cancelar la inscripción"
}

pub fn create_fallback() -> &'static str {
    "No se pudo crear el partido"
}

pub fn delete_fallback() -> &'static str {
    "No se pudo eliminar el partido"
}

pub fn roster_fallback() -> &'static str {
    "No se pudieron cargar los inscriptos"
}

pub fn profile_fallback() -> &'static str {
    "No se pudo cargar la información del usuario"
}

pub fn prefs_fallback() -> &'static str {
    "No se pudieron guardar las preferencias"
}

pub fn prefs_saved() -> &'static str {
    "Preferencias guardadas correctamente."
}

pub fn delete_confirm(partido_id: i64) -> String {
    format!(
        "¿Eliminar el partido {}? Esta acción no se puede deshacer.",
        partido_id
    )
}

/// What to print for a failed operation: validation and backend errors carry
/// their own message; transport and everything else collapse to `fallback`.
pub fn user_facing(err: &AppError, fallback: &str) -> String {
    match err {
        AppError::Validation { message, .. } => message.clone(),
        AppError::Backend { message, .. } => message.clone(),
        AppError::NotAuthenticated => not_authenticated().to_string(),
        _ => fallback.to_string(),
    }
}
