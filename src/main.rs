use contact_book::prelude::{AppError, run_app};
use dotenv::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), AppError> {
    dotenv().ok();

    // Logs go to stderr so stdout stays the menu transcript
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    run_app()
}
