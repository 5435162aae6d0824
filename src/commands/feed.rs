use super::report;
use crate::error::Result;
use crate::managers::{filter_listings, RefreshKind};
use crate::models::Tarjeta;
use crate::{messages, App};

/// Browse the open-listing feed, optionally filtered by venue or address.
pub async fn feed(app: &App, query: Option<String>) -> Result<()> {
    let tarjetas = app
        .feed
        .fetch_listings(RefreshKind::Initial)
        .await
        .map_err(|e| report(e, messages::feed_fallback()))?;

    let query = query.unwrap_or_default();
    let visible = filter_listings(&tarjetas, &query);

    if visible.is_empty() {
        println!("No hay partidos abiertos.");
        return Ok(());
    }

    let current_id = app.session.current_user().await.map(|u| u.id);
    for tarjeta in visible {
        print_tarjeta(tarjeta, current_id);
    }
    Ok(())
}

pub async fn join(app: &App, tarjeta_id: i64) -> Result<()> {
    let usuario = app
        .session
        .require_user()
        .await
        .map_err(|e| report(e, messages::enroll_fallback()))?;

    // Populate the feed first so the client-side gate sees the listing.
    app.feed
        .fetch_listings(RefreshKind::Initial)
        .await
        .map_err(|e| report(e, messages::feed_fallback()))?;

    app.feed
        .enroll(tarjeta_id, usuario.id)
        .await
        .map_err(|e| report(e, messages::enroll_fallback()))?;

    println!("Inscripción confirmada en el partido {}.", tarjeta_id);
    Ok(())
}

pub async fn leave(app: &App, tarjeta_id: i64) -> Result<()> {
    let usuario = app
        .session
        .require_user()
        .await
        .map_err(|e| report(e, messages::unenroll_fallback()))?;

    app.feed
        .unenroll(tarjeta_id, usuario.id)
        .await
        .map_err(|e| report(e, messages::unenroll_fallback()))?;

    println!("Te bajaste del partido {}.", tarjeta_id);
    Ok(())
}

fn print_tarjeta(tarjeta: &Tarjeta, current_id: Option<i64>) {
    let estado = if tarjeta.is_complete() {
        " [completo]"
    } else if current_id == Some(tarjeta.usuario_id) {
        " [tuyo]"
    } else {
        ""
    };

    println!("#{} {} - {}", tarjeta.id, tarjeta.nombre, tarjeta.direccion);
    println!(
        "    📅 {}  ⏰ {}  Falta(n): {}{}",
        tarjeta.dia, tarjeta.hora, tarjeta.jugadores_faltantes, estado
    );
}
