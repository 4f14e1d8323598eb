use std::{net::TcpListener, sync::Arc, time::Duration};

use actix_cors::Cors;
use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing_actix_web::TracingLogger;

use crate::{
    routes::{health_check, mensagens},
    service::{MensagemService, RepositoryMensagemService},
    settings::{DatabaseSettings, Settings, StorageBackend},
    storage::{
        memory::InMemoryMensagemRepository, postgres::PostgresMensagemRepository,
        MensagemRepository,
    },
};

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let repository: Arc<dyn MensagemRepository> = match settings.storage {
            StorageBackend::Postgres => {
                let db_pool = get_db_pool(&settings.database)
                    .await
                    .expect("Could not connect to database.");

                sqlx::migrate!()
                    .run(&db_pool)
                    .await
                    .expect("Failed to run database migrations.");

                Arc::new(PostgresMensagemRepository::new(db_pool))
            }
            StorageBackend::Memory => Arc::new(InMemoryMensagemRepository::new()),
        };

        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr().unwrap().port();

        let server = run(listener, repository)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub async fn get_db_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .connect_timeout(Duration::from_secs(5))
        .connect_with(settings.with_db())
        .await
}

pub fn run(
    listener: TcpListener,
    repository: Arc<dyn MensagemRepository>,
) -> Result<Server, std::io::Error> {
    let service: Arc<dyn MensagemService> = Arc::new(RepositoryMensagemService::new(repository));
    let service = Data::from(service);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(
                Cors::default()
                    .allow_any_header()
                    .allow_any_method()
                    .allow_any_origin(),
            )
            .app_data(service.clone())
            .route("/health_check", web::get().to(health_check))
            .route("/mensagens", web::post().to(mensagens::create))
            .route("/mensagens", web::get().to(mensagens::list))
            .route("/mensagens/{id}", web::get().to(mensagens::get))
            .route("/mensagens/{id}", web::put().to(mensagens::update))
            .route("/mensagens/{id}", web::delete().to(mensagens::delete))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
