use starnav::session::TourSession;
use starnav::{ConsoleOverlay, NavConfig, SessionConfig, StarCatalog, fatal, info, warn};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let session_cfg = SessionConfig::from_env();
    let nav_cfg = NavConfig::from_env();
    let catalog = match StarCatalog::load(&session_cfg.catalog_path) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => fatal!("Cannot load star catalog {}: {e}", session_cfg.catalog_path),
    };

    let c_tok = CancellationToken::new();
    let watchdog = {
        let c_tok_clone = c_tok.clone();
        let max_runtime = session_cfg.max_runtime;
        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(max_runtime) => {
                    warn!("Runtime limit of {}s reached, stopping tour", max_runtime.as_secs());
                    c_tok_clone.cancel();
                }
                () = c_tok_clone.cancelled() => {}
            }
        })
    };

    let mut session = TourSession::new(nav_cfg, &session_cfg, catalog, ConsoleOverlay::new());
    let summary = session.run(c_tok.clone()).await;
    c_tok.cancel();
    watchdog.await.ok();

    info!(
        "Tour finished: {} stops in {} ticks, {} info cards shown{}",
        summary.stops,
        summary.ticks,
        session.navigation().sink().shown(),
        if summary.cancelled { " (cancelled)" } else { "" }
    );
}
