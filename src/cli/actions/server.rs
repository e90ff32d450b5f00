use crate::api;
use crate::cli::actions::Action;
use anyhow::Result;
use std::sync::Arc;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            frontend_base_url,
            demo,
        } => {
            api::new(port, Arc::new(demo), &frontend_base_url).await?;
        }
    }

    Ok(())
}
