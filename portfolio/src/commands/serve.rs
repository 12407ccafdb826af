use portfolio_config::Config;
use portfolio_persistence_contracts::contact::ContactMessageRepository;
use tracing::info;

use crate::environment;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Opening message store");
    let contact_repo = environment::contact_repo(&config.store).await?;
    contact_repo.ping().await?;
    info!(messages = contact_repo.count().await?, "Message store ready");

    let server = environment::rest_server(&config, contact_repo);
    server.serve(config.http.address).await
}
