pub use tldr_url::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    tldr_url::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
