// --- Planificador de semestres - Archivo principal ---

use coursepath::{run_server, AppConfig};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env();
    println!("=== Planificador de Semestres (API) ===");
    println!("Catálogo: {}", config.db_path.display());
    println!("Iniciando servidor en http://{}", config.bind_addr);
    run_server(config).await
}
