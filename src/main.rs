use std::sync::Arc;

use beyondsports_api::api::{build_router, AppState};
use beyondsports_api::config::AppConfig;
use beyondsports_api::domain::repositories::{PlayerRepository, TeamRepository};
use beyondsports_api::infrastructure::repositories::{
    InMemoryStore, PostgresPlayerRepository, PostgresTeamRepository,
};
use beyondsports_api::infrastructure::{database, logging, seed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    logging::init_tracing(&config.log_filter);

    let (teams, players): (Arc<dyn TeamRepository>, Arc<dyn PlayerRepository>) =
        match &config.database_url {
            Some(url) => {
                let pool = database::connect(url, config.max_connections).await?;
                (
                    Arc::new(PostgresTeamRepository::new(pool.clone())),
                    Arc::new(PostgresPlayerRepository::new(pool)),
                )
            }
            None => {
                tracing::warn!("DATABASE_URL not set, using in-memory store");
                let store = Arc::new(InMemoryStore::new());
                (store.team_repository(), store.player_repository())
            }
        };

    if config.seed_demo_data {
        seed::seed_demo_data(teams.as_ref(), players.as_ref()).await?;
    }

    let app = build_router(AppState::new(teams, players));

    tracing::info!("Server listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
