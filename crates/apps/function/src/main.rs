mod http_handler;

use app_state::load_app_settings;
use common_services::storage::JsonFileGalleryStore;
use http_handler::{FunctionState, function_handler};
use lambda_http::{Error, run, service_fn};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = load_app_settings().map_err(|e| format!("{e:?}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let state = Arc::new(FunctionState {
        store: Arc::new(JsonFileGalleryStore::new(
            settings.gallery.document_path.clone(),
        )),
        expose_error_details: settings.api.expose_error_details,
    });

    run(service_fn(move |event| function_handler(event, state.clone()))).await
}
