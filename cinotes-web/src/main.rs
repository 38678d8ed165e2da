use cinotes_web::configuration::CONFIGURATION;
use cinotes_web::startup::run;
use cinotes_web::telemetry::{get_otlp_tracer, get_subscriber, init_tracing};
use std::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(&CONFIGURATION).with(tracing_subscriber::fmt::layer());
    if let Some(tracer) = get_otlp_tracer(&CONFIGURATION) {
        init_tracing(subscriber.with(tracing_opentelemetry::layer().with_tracer(tracer)));
    } else {
        init_tracing(subscriber);
    }

    let address = CONFIGURATION.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!(
        %address,
        readonly = CONFIGURATION.readonly,
        "Starting cinotes-web"
    );
    run(listener, CONFIGURATION.get_note_store())?.await?;
    opentelemetry::global::shutdown_tracer_provider();
    Ok(())
}
