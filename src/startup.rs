use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::config::Settings;
use crate::copy_client::CopyClient;
use crate::routes::{
    handle_create_signup, handle_generate_copy, handle_list_signups, handle_signup_stats,
    health_check,
};
use crate::signup_store::SignupStore;

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, std::io::Error> {
        let store = SignupStore::new(config.get_storage_data_dir());
        let copy_client = CopyClient::new(
            config.get_copy_client_base_url(),
            config.get_copy_client_model(),
            config.get_copy_client_api_key(),
            None,
        );

        let listener =
            TcpListener::bind(config.get_address()).expect("Failed to bind the address.");
        let port = listener.local_addr().unwrap().port();
        let server = run(listener, store, copy_client)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    store: SignupStore,
    copy_client: CopyClient,
) -> Result<Server, std::io::Error> {
    let store = web::Data::new(store);
    let copy_client = web::Data::new(copy_client);

    let server = HttpServer::new(move || {
        // App is where your application logic lives: routing, middlewares, request handler, etc
        App::new()
            // 'wrap' method adds a middleware to the App. This specific middleware provide incoming
            // request logger
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/signups", web::post().to(handle_create_signup))
            .route("/signups", web::get().to(handle_list_signups))
            .route("/signups/stats", web::get().to(handle_signup_stats))
            .route("/copy", web::post().to(handle_generate_copy))
            .app_data(store.clone())
            .app_data(copy_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
