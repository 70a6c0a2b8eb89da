mod client;
mod i18n;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, scheduler::token_cleanup, startup};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let state = startup::build_state(&config, db.clone()).await?;

        tracing::info!("Starting server");

        // Start token cleanup scheduler
        let scheduler_db = db.clone();
        tokio::spawn(async move {
            if let Err(e) = token_cleanup::start_scheduler(scheduler_db).await {
                tracing::error!("Token cleanup scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(state).layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
