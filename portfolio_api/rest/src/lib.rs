use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use portfolio_core_contact_contracts::ContactFeatureService;
use portfolio_core_health_contracts::HealthFeatureService;
use portfolio_core_resume_contracts::ResumeFeatureService;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
mod models;
mod routes;


#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact, Resume> {
    health: Health,
    contact: Contact,
    resume: Resume,
}

impl<Health, Contact, Resume> RestServer<Health, Contact, Resume>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
    Resume: ResumeFeatureService,
{
    pub fn new(health: Health, contact: Contact, resume: Resume) -> Self {
        Self {
            health,
            contact,
            resume,
        }
    }

    pub async fn serve(self, address: SocketAddr) -> anyhow::Result<()> {
        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("Failed to bind to {address}"))?;
        self.serve_on(listener).await
    }

    /// Serves requests on an already bound listener until the process exits.
    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        info!(address = %listener.local_addr()?, "Starting REST API server");
        axum::serve(listener, self.router())
            .await
            .context("REST API server failed")
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::resume::router(self.resume.into()));

        // layers added last run first
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
