//! src/startup.rs
use crate::configuration::{Settings, TableSettings};
use crate::routes::{
    health_check, list_products, list_ranking, list_scores, preflight, refresh, status,
};
use crate::supabase::Supabase;
use actix_web::dev::Server;
use actix_web::middleware::DefaultHeaders;
use actix_web::{guard, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, std::io::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener = TcpListener::bind(address)?;
    let port = tcp_listener.local_addr()?.port();

    let tables = config.supabase.tables.clone();
    let supabase = Supabase::from(config.supabase);

    let server = run(tcp_listener, supabase, tables)?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    supabase: Supabase,
    tables: TableSettings,
) -> Result<Server, std::io::Error> {
    let supabase = web::Data::new(supabase);
    let tables = web::Data::new(tables);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            // Registered first so OPTIONS never falls through to a 404 or 405.
            .service(
                web::resource("/{path:.*}")
                    .guard(guard::Options())
                    .to(preflight),
            )
            .route("/", web::get().to(health_check))
            .route("/status", web::get().to(status))
            .route("/produtos", web::get().to(list_products))
            .route("/ranking", web::get().to(list_ranking))
            .route("/pontuacao", web::get().to(list_scores))
            .route("/atualizar", web::post().to(refresh))
            .app_data(supabase.clone())
            .app_data(tables.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
