use std::net::TcpListener;

use startup_launchpad::config::get_configuration;
use startup_launchpad::copy_client::CopyClient;
use startup_launchpad::signup_store::SignupStore;
use startup_launchpad::startup::run;
use startup_launchpad::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(String::from("startup_launchpad"), String::from("debug"));

    init_subscriber(subscriber);

    let config = get_configuration().expect("Missing configuration file.");
    let store = SignupStore::new(config.get_storage_data_dir());
    let copy_client = CopyClient::new(
        config.get_copy_client_base_url(),
        config.get_copy_client_model(),
        config.get_copy_client_api_key(),
        None,
    );
    let listener = TcpListener::bind(config.get_address()).expect("Failed to bind the address.");

    tracing::info!("Server listening on {}", config.get_address());

    run(listener, store, copy_client)?.await
}
