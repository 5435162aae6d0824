use dialoguer::Confirm;

use super::report;
use crate::api::CrearPartidoRequest;
use crate::error::Result;
use crate::{messages, App};

/// List the matches created by the current user.
pub async fn mine(app: &App) -> Result<()> {
    let usuario = app
        .session
        .require_user()
        .await
        .map_err(|e| report(e, messages::feed_fallback()))?;

    let partidos = app
        .matches
        .fetch_own_listings(usuario.id)
        .await
        .map_err(|e| report(e, messages::feed_fallback()))?;

    if partidos.is_empty() {
        println!("Todavía no creaste ningún partido.");
        return Ok(());
    }

    for partido in partidos {
        println!("#{} {} - {}", partido.id, partido.nombre, partido.direccion);
        println!(
            "    📅 {}  ⏰ {}  Falta(n): {}  👥 {} inscriptos",
            partido.dia,
            partido.hora,
            partido.jugadores_faltantes,
            partido.inscritos.len()
        );
    }
    Ok(())
}

pub async fn create(
    app: &App,
    cancha: String,
    lugar: String,
    dia: String,
    hora: String,
    jugadores: u32,
) -> Result<()> {
    let usuario = app
        .session
        .require_user()
        .await
        .map_err(|e| report(e, messages::create_fallback()))?;

    let req = CrearPartidoRequest {
        cancha,
        lugar,
        dia,
        hora,
        jugadores_faltantes: jugadores,
        usuario_id: usuario.id,
    };

    app.matches
        .create_listing(req)
        .await
        .map_err(|e| report(e, messages::create_fallback()))?;

    println!("Partido creado.");
    Ok(())
}

pub async fn delete(app: &App, partido_id: i64, yes: bool) -> Result<()> {
    let usuario = app
        .session
        .require_user()
        .await
        .map_err(|e| report(e, messages::delete_fallback()))?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(messages::delete_confirm(partido_id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Operación cancelada.");
            return Ok(());
        }
    }

    app.matches
        .delete_listing(partido_id, usuario.id)
        .await
        .map_err(|e| report(e, messages::delete_fallback()))?;

    println!("Partido {} eliminado.", partido_id);
    Ok(())
}

/// Show who is enrolled in one of your listings.
pub async fn roster(app: &App, tarjeta_id: i64) -> Result<()> {
    let roster = app
        .matches
        .roster(tarjeta_id)
        .await
        .map_err(|e| report(e, messages::roster_fallback()))?;

    if roster.is_empty() {
        println!("Todavía no hay inscriptos.");
        return Ok(());
    }

    println!("Inscriptos ({}):", roster.len());
    for inscrito in roster {
        println!("  - {} (id {})", inscrito.nombre, inscrito.id);
    }
    Ok(())
}

/// Remove an enrolled user from one of your listings.
pub async fn kick(app: &App, tarjeta_id: i64, usuario_id: i64) -> Result<()> {
    let owner = app
        .session
        .require_user()
        .await
        .map_err(|e| report(e, messages::roster_fallback()))?;

    let remaining = app
        .matches
        .remove_from_roster(tarjeta_id, usuario_id, owner.id)
        .await
        .map_err(|e| report(e, messages::unenroll_fallback()))?;

    println!(
        "Usuario {} eliminado del partido {}. Quedan {} inscriptos.",
        usuario_id,
        tarjeta_id,
        remaining.len()
    );
    Ok(())
}
