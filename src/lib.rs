#[macro_use]
extern crate tracing;

pub mod error;
mod extractors;
mod handlers;
mod middlewares;
mod shared;
mod utils;

use crate::utils::SignalHandler;
pub use shared::*;
use tokio::net::TcpListener;

pub async fn run<S: SharedTrait>(listener: TcpListener, shared: S) -> anyhow::Result<()> {
    info!(
        "listening on port {}",
        listener.local_addr()?.port()
    );

    let routes = handlers::routes::<S>();
    let app = middlewares::middlewares(shared, routes);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(SignalHandler::new())
        .await?;

    Ok(())
}
