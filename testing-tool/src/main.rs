use anyhow::{anyhow, Result};
use colored::*;
use serde_json::{json, Value};
use std::io::{self, Write};
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "👥 User Cache API Testing Tool".bright_blue().bold());
    println!("{}", "==============================".bright_blue());
    println!();

    // Paso 1: Pedir la URL del servidor
    let base_url = get_base_url()?;
    let client = reqwest::Client::new();

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📥 Listar usuarios (con cache)");
        println!("2. 📄 Listar usuarios (sin cache)");
        println!("3. ➕ Crear usuario");
        println!("4. 🗑️  Eliminar usuario (invalida cache)");
        println!("5. 🧟 Eliminar usuario (sin invalidar cache)");
        println!("6. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-6): ")?;

        let result = match choice.as_str() {
            "1" => list_users(&client, &base_url, "/users").await,
            "2" => list_users(&client, &base_url, "/usersWithoutCache").await,
            "3" => create_user(&client, &base_url).await,
            "4" => delete_user(&client, &base_url, "/user").await,
            "5" => delete_user(&client, &base_url, "/userWithoutRemovingCache").await,
            "6" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{}", format!("❌ Error: {}", e).bright_red());
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;

    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn get_base_url() -> Result<String> {
    println!("{}", "🌐 SERVIDOR".bright_cyan().bold());
    println!("{}", "===========".bright_cyan());

    let url = prompt("URL base (Enter = http://localhost:3000): ")?;
    if url.is_empty() {
        Ok("http://localhost:3000".to_string())
    } else {
        Ok(url.trim_end_matches('/').to_string())
    }
}

async fn list_users(client: &reqwest::Client, base_url: &str, path: &str) -> Result<()> {
    println!();
    println!("{}", format!("📥 GET {}", path).bright_cyan().bold());

    let started = Instant::now();
    let response = client.get(format!("{}{}", base_url, path)).send().await?;
    let elapsed = started.elapsed();

    let status = response.status();
    let body: Value = response.json().await?;

    println!("{}", format!("Status: {} ({:?})", status, elapsed).bright_blue());

    let users = body
        .as_array()
        .ok_or_else(|| anyhow!("respuesta inesperada: {}", body))?;

    println!("{}", format!("👥 USUARIOS: {} elementos", users.len()).bright_green().bold());
    for user in users {
        println!(
            "   {} | {} <{}>",
            user["id"].as_str().unwrap_or("?"),
            user["name"].as_str().unwrap_or("?"),
            user["email"].as_str().unwrap_or("?")
        );
    }

    Ok(())
}

async fn create_user(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "➕ CREAR USUARIO".bright_cyan().bold());

    let name = prompt("Nombre: ")?;
    let email = prompt("Email: ")?;

    let payload = json!({ "name": name, "email": email });

    println!("{}", "📦 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let response = client
        .post(format!("{}/user", base_url))
        .json(&payload)
        .send()
        .await?;

    print_response(response).await
}

async fn delete_user(client: &reqwest::Client, base_url: &str, path: &str) -> Result<()> {
    println!();
    println!("{}", format!("🗑️  DELETE {}/:id", path).bright_cyan().bold());

    let id = prompt("Id del usuario: ")?;
    let response = client
        .delete(format!("{}{}/{}", base_url, path, id))
        .send()
        .await?;

    print_response(response).await
}

async fn print_response(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    let body: Value = response.json().await?;

    let status_line = format!("Status: {}", status);
    if status.is_success() {
        println!("{}", status_line.bright_green());
    } else {
        println!("{}", status_line.bright_red());
    }
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
