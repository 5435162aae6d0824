use super::report;
use crate::error::Result;
use crate::{messages, App};

pub async fn profile(app: &App) -> Result<()> {
    let usuario = app
        .session
        .require_user()
        .await
        .map_err(|e| report(e, messages::profile_fallback()))?;

    let profile = app
        .profile
        .load_profile(usuario.id)
        .await
        .map_err(|e| report(e, messages::profile_fallback()))?;

    println!("{} <{}>", profile.usuario.nombre, profile.usuario.correo);

    let prefs = profile.preferencias();
    if prefs.dias_disponibles.is_empty()
        && prefs.horarios_disponibles.is_empty()
        && prefs.barrios_preferidos.is_empty()
    {
        println!("Sin preferencias cargadas.");
    } else {
        println!("Días disponibles:     {}", prefs.dias_disponibles);
        println!("Horarios disponibles: {}", prefs.horarios_disponibles);
        println!("Barrios preferidos:   {}", prefs.barrios_preferidos);
    }

    println!(
        "Historial: {} partidos jugados, {} inscripciones pasadas.",
        profile.historial.len(),
        profile.pasadas.len()
    );

    if profile.proximas.is_empty() {
        println!("No tenés inscripciones próximas.");
    } else {
        println!("Próximos partidos:");
        for tarjeta in &profile.proximas {
            println!(
                "  - {} ({}) 📅 {} ⏰ {}",
                tarjeta.nombre, tarjeta.direccion, tarjeta.dia, tarjeta.hora
            );
        }
    }
    Ok(())
}

/// Played matches plus past enrollments.
pub async fn history(app: &App) -> Result<()> {
    let usuario = app
        .session
        .require_user()
        .await
        .map_err(|e| report(e, messages::profile_fallback()))?;

    let profile = app
        .profile
        .load_profile(usuario.id)
        .await
        .map_err(|e| report(e, messages::profile_fallback()))?;

    if profile.historial.is_empty() {
        println!("No hay partidos en el historial.");
    } else {
        println!("Partidos jugados:");
        for partido in &profile.historial {
            match &partido.resultado {
                Some(resultado) => println!(
                    "  - {} en {}: {}",
                    partido.fecha, partido.ubicacion, resultado
                ),
                None => println!("  - {} en {}", partido.fecha, partido.ubicacion),
            }
        }
    }

    if profile.pasadas.is_empty() {
        println!("No hay inscripciones pasadas.");
    } else {
        println!("Inscripciones pasadas:");
        for tarjeta in &profile.pasadas {
            println!(
                "  - {} ({}) 📅 {} ⏰ {}",
                tarjeta.nombre, tarjeta.direccion, tarjeta.dia, tarjeta.hora
            );
        }
    }
    Ok(())
}

/// Update preferences. Unspecified fields keep their stored value because the
/// wire contract is a full three-field replace.
pub async fn prefs(
    app: &App,
    dias: Option<String>,
    horarios: Option<String>,
    barrios: Option<String>,
) -> Result<()> {
    let usuario = app
        .session
        .require_user()
        .await
        .map_err(|e| report(e, messages::prefs_fallback()))?;

    let current = app
        .profile
        .load_profile(usuario.id)
        .await
        .map_err(|e| report(e, messages::profile_fallback()))?;

    let mut prefs = current.preferencias();
    if let Some(dias) = dias {
        prefs.dias_disponibles = dias;
    }
    if let Some(horarios) = horarios {
        prefs.horarios_disponibles = horarios;
    }
    if let Some(barrios) = barrios {
        prefs.barrios_preferidos = barrios;
    }

    app.profile
        .save_preferences(usuario.id, prefs)
        .await
        .map_err(|e| report(e, messages::prefs_fallback()))?;

    println!("{}", messages::prefs_saved());
    Ok(())
}
