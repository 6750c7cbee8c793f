use crate::services::game_service::GameService;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Background task closing idle games every `period`.
pub fn spawn_janitor(service: GameService, period: Duration) -> JoinHandle<()> {
    log::info!("⏱️ Starting background janitor (every {:?})", period);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            log::debug!("Checking for stale games");
            let closed = service.expire_stale().await;
            if !closed.is_empty() {
                log::info!("🧹 Closed {} stale game(s): {:?}", closed.len(), closed);
            }
        }
    })
}
