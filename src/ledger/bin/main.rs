use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use lambda_http::{run, Error};
use tracing::info;
use mediathek::catalog::Medium;
use mediathek::catalog::registry::InMemoryCatalog;
use mediathek::checkout::controller::{lend_media, return_media};
use mediathek::core::controller::AppState;
use mediathek::core::domain::Configuration;
use mediathek::core::library::MediumKind;
use mediathek::customers::Customer;
use mediathek::customers::registry::InMemoryCustomerRegistry;
use mediathek::hold::controller::{cancel_reservation, reserve_media};
use mediathek::ledger::controller::medium_status;
use mediathek::ledger::factory::create_ledger;
use mediathek::ledger::share_ledger;
use mediathek::utils::logging::setup_tracing;

const DEV_MODE: bool = true;

fn demo_customers() -> InMemoryCustomerRegistry {
    InMemoryCustomerRegistry::new(vec![
        Customer::new("123456", "ich", "du"),
        Customer::new("666999", "paul", "panter"),
        Customer::new("666998", "paula", "panter"),
    ])
}

fn demo_catalog() -> Result<InMemoryCatalog, Error> {
    Ok(InMemoryCatalog::new(vec![
        Medium::new("CD1", "bar", MediumKind::Cd),
        Medium::new("CD2", "baz", MediumKind::Cd),
        Medium::new("DVD1", "foo", MediumKind::Dvd),
        Medium::new("BOOK1", "qux", MediumKind::Book),
        Medium::new("GAME1", "quux", MediumKind::VideoGame),
    ])?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        Configuration::new("dev")
    } else {
        Configuration::from_env()
    };

    let customers = Arc::new(demo_customers());
    let catalog = Arc::new(demo_catalog()?);
    let mut ledger = create_ledger(&config, customers.clone(), catalog.clone(), vec![])?;
    let branch = config.branch_id.to_string();
    let _ = ledger.register_observer(Box::new(move || info!(branch = %branch, "ledger changed")));
    let state = AppState::new(config, share_ledger(ledger), customers, catalog);

    let app = Router::new()
        .route("/checkout", post(lend_media))
        .route("/checkout/return", post(return_media))
        .route("/hold", post(reserve_media))
        .route("/hold/cancel", post(cancel_reservation))
        .route("/media/:medium_id", get(medium_status))
        .with_state(state);

    run(app).await
}
