use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::debug;

mod api;
mod commands;
mod error;
mod managers;
mod messages;
mod models;
mod schedule;
mod state;

use api::ApiClient;
use managers::{
    create_shared_feed_manager, create_shared_match_manager, create_shared_profile_manager,
    create_shared_session_manager, SharedFeedManager, SharedMatchManager, SharedProfileManager,
    SharedSessionManager,
};
use state::SessionStore;

/// Cliente de línea de comandos para coordinar partidos informales
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crear una cuenta e iniciar sesión
    Register {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        correo: String,
        /// Se pide de forma interactiva si no se pasa
        #[arg(long)]
        password: Option<String>,
    },
    /// Iniciar sesión
    Login {
        #[arg(long)]
        correo: String,
        /// Se pide de forma interactiva si no se pasa
        #[arg(long)]
        password: Option<String>,
    },
    /// Cerrar la sesión guardada
    Logout,
    /// Mostrar la sesión activa
    Whoami,
    /// Ver los partidos abiertos
    Feed {
        /// Filtrar por cancha o dirección
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Inscribirse en un partido
    Join { tarjeta_id: i64 },
    /// Bajarse de un partido
    Leave { tarjeta_id: i64 },
    /// Ver los partidos que creaste
    Mine,
    /// Publicar un partido
    Create {
        #[arg(long)]
        cancha: String,
        #[arg(long)]
        lugar: String,
        /// Ej: "Sabado 18 de octubre"
        #[arg(long)]
        dia: String,
        /// Ej: "18:00"
        #[arg(long)]
        hora: String,
        /// Jugadores faltantes
        #[arg(long)]
        jugadores: u32,
    },
    /// Eliminar un partido que creaste
    Delete {
        partido_id: i64,
        /// No pedir confirmación
        #[arg(long, short)]
        yes: bool,
    },
    /// Ver los inscriptos de un partido
    Roster { tarjeta_id: i64 },
    /// Sacar a un inscripto de tu partido
    Kick { tarjeta_id: i64, usuario_id: i64 },
    /// Ver tu perfil y próximos partidos
    Profile,
    /// Ver partidos jugados e inscripciones pasadas
    History,
    /// Editar preferencias
    Prefs {
        #[arg(long)]
        dias: Option<String>,
        #[arg(long)]
        horarios: Option<String>,
        #[arg(long)]
        barrios: Option<String>,
    },
}

/// Shared application state
pub struct App {
    pub session: SharedSessionManager,
    pub feed: SharedFeedManager,
    pub matches: SharedMatchManager,
    pub profile: SharedProfileManager,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let api_url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let state_path = std::env::var("STATE_PATH").unwrap_or_else(|_| "state".to_string());

    // Ensure state directory exists
    tokio::fs::create_dir_all(&state_path).await.ok();

    debug!("Using backend at {}", api_url);
    let api = ApiClient::new(&api_url);

    let session = create_shared_session_manager(api.clone(), SessionStore::new(&state_path));
    session.load_stored_session().await;

    let app = App {
        session,
        feed: create_shared_feed_manager(api.clone()),
        matches: create_shared_match_manager(api.clone()),
        profile: create_shared_profile_manager(api),
    };

    if run(&app, args.command).await.is_err() {
        // The handler already printed the user-facing line.
        std::process::exit(1);
    }
    Ok(())
}

async fn run(app: &App, command: Command) -> error::Result<()> {
    match command {
        Command::Register {
            nombre,
            correo,
            password,
        } => commands::auth::register(app, &nombre, &correo, password).await,
        Command::Login { correo, password } => {
            commands::auth::login(app, &correo, password).await
        }
        Command::Logout => commands::auth::logout(app).await,
        Command::Whoami => commands::auth::whoami(app).await,
        Command::Feed { query } => commands::feed::feed(app, query).await,
        Command::Join { tarjeta_id } => commands::feed::join(app, tarjeta_id).await,
        Command::Leave { tarjeta_id } => commands::feed::leave(app, tarjeta_id).await,
        Command::Mine => commands::matches::mine(app).await,
        Command::Create {
            cancha,
            lugar,
            dia,
            hora,
            jugadores,
        } => commands::matches::create(app, cancha, lugar, dia, hora, jugadores).await,
        Command::Delete { partido_id, yes } => {
            commands::matches::delete(app, partido_id, yes).await
        }
        Command::Roster { tarjeta_id } => commands::matches::roster(app, tarjeta_id).await,
        Command::Kick {
            tarjeta_id,
            usuario_id,
        } => commands::matches::kick(app, tarjeta_id, usuario_id).await,
        Command::Profile => commands::profile::profile(app).await,
        Command::History => commands::profile::history(app).await,
        Command::Prefs {
            dias,
            horarios,
            barrios,
        } => commands::profile::prefs(app, dias, horarios, barrios).await,
    }
}
