use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use user_cache_api::cache::CacheManager;
use user_cache_api::config::environment::EnvironmentConfig;
use user_cache_api::routes;
use user_cache_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno (.env es opcional)
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("👥 User Cache API - listado de usuarios con cache Redis");
    info!("=====================================================");

    // Inicializar Redis y cache: con host configurado, no conectar es fatal
    let cache_config = config.cache_config();
    let cache = match CacheManager::connect(&cache_config).await {
        Ok(cache) => cache,
        Err(e) => {
            // Un host que rechaza la conexión también acaba aquí como timeout
            error!(
                "❌ Error conectando a Redis en {} (timeout: {}s): {}",
                cache_config.masked_url(),
                cache_config.operation_timeout_secs,
                e
            );
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    if cache.is_enabled() {
        info!("✅ Cache Redis habilitado (TTL: {}s)", config.cache_ttl_secs);
    } else {
        info!("⚪ Cache deshabilitado, todas las lecturas van al repositorio");
    }

    let server_url = config.server_url();
    let app = routes::create_router(AppState::new(config, cache));

    info!("🌐 Servidor iniciando en http://{}", server_url);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Estado del servicio");
    info!("   GET    /users - Listar usuarios (con cache)");
    info!("   GET    /usersWithoutCache - Listar usuarios (sin cache)");
    info!("   POST   /user - Crear usuario");
    info!("   DELETE /user/:id - Eliminar usuario e invalidar cache");
    info!("   DELETE /userWithoutRemovingCache/:id - Eliminar usuario sin invalidar cache");

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
