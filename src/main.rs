use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use agenda_digital::config::{Config, StoreBackend};
use agenda_digital::models::proposal::{MemoryProposalStore, PgProposalStore, ProposalStore};
use agenda_digital::public_info::{PublicInfoTracker, spawn_refresh_loop};
use agenda_digital::services::ProposalService;
use agenda_digital::{db, handlers};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = Config::from_env().map_err(io::Error::other)?;

    // Tracker first: its initial fetch may fail without stopping startup.
    let tracker = PublicInfoTracker::init(&config.public_info)
        .await
        .map_err(io::Error::other)?;
    let tracker = Arc::new(tracker);
    let refresher = spawn_refresh_loop(tracker.clone(), config.public_info.refresh_every);

    let served = match config.store {
        StoreBackend::Postgres => {
            let pool = db::init_pool(&config).await.map_err(io::Error::other)?;
            db::run_migrations(&pool).await.map_err(io::Error::other)?;
            serve(&config, PgProposalStore::new(pool), tracker).await
        }
        StoreBackend::Memory => {
            log::warn!("Using in-memory proposal store; proposals are lost on restart");
            serve(&config, MemoryProposalStore::new(), tracker).await
        }
    };

    refresher.shutdown().await;
    served
}

async fn serve<S: ProposalStore + 'static>(
    config: &Config,
    store: S,
    tracker: Arc<PublicInfoTracker>,
) -> io::Result<()> {
    let service = web::Data::new(ProposalService::new(store));
    let tracker = web::Data::from(tracker);

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .app_data(tracker.clone())
            .configure(handlers::configure::<S>)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
