use dialoguer::Password;
use tracing::info;

use super::report;
use crate::error::Result;
use crate::{messages, App};

pub async fn register(
    app: &App,
    nombre: &str,
    correo: &str,
    password: Option<String>,
) -> Result<()> {
    let (password, confirm) = match password {
        Some(p) => (p.clone(), p),
        None => {
            let p = Password::new()
                .with_prompt("Contraseña")
                .with_confirmation("Confirmá la contraseña", "Las contraseñas no coinciden")
                .interact()?;
            (p.clone(), p)
        }
    };

    let usuario = app
        .session
        .register(nombre, correo, &password, &confirm)
        .await
        .map_err(|e| report(e, messages::register_fallback()))?;

    info!("Registration completed for user {}", usuario.id);
    println!("{}", messages::register_success(&usuario.nombre));
    Ok(())
}

pub async fn login(app: &App, correo: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Contraseña").interact()?,
    };

    let usuario = app
        .session
        .login(correo, &password)
        .await
        .map_err(|e| report(e, messages::login_fallback()))?;

    println!("{}", messages::login_success(&usuario.nombre));
    Ok(())
}

pub async fn logout(app: &App) -> Result<()> {
    app.session.logout().await;
    println!("{}", messages::logout_done());
    Ok(())
}

pub async fn whoami(app: &App) -> Result<()> {
    match app.session.current_user().await {
        Some(usuario) => println!(
            "Sesión activa: {} <{}> (id {})",
            usuario.nombre, usuario.correo, usuario.id
        ),
        None => println!("{}", messages::not_authenticated()),
    }
    Ok(())
}
