use std::net::SocketAddr;

use axum::Router;
use bon::Builder;
use tokio_graceful_shutdown::SubsystemHandle;
use tracing::info;

/// Runs the axum server until the toplevel requests shutdown.
#[derive(Builder)]
pub struct ServerSubsystem {
    pub(crate) addr: SocketAddr,
    pub(crate) router: Router,
}

impl ServerSubsystem {
    pub async fn run(self, subsys: SubsystemHandle) -> std::io::Result<()> {
        info!("Starting Server subsystem");

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { subsys.on_shutdown_requested().await })
            .await?;

        info!("Server subsystem finished");
        Ok(())
    }
}
