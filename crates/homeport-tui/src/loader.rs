//! Loader tasks — bridge between [`ApiClient`] and TUI actions.
//!
//! Startup fires four independent fetches; each sends exactly one
//! `…Loaded` or `…LoadFailed` action when it lands, in whatever order
//! the responses arrive. A failed fetch is logged here and surfaces as
//! an inline message in its own region; siblings are unaffected and
//! nothing is retried.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use homeport_api::ApiClient;

use crate::action::Action;

/// Spawn the four startup loads: featured listings, the full listing
/// set, agents, and house types. Completion order is free; each load
/// updates only its own region.
pub fn spawn_initial_load(client: &Arc<ApiClient>, top_limit: u32, action_tx: &UnboundedSender<Action>) {
    {
        let client = Arc::clone(client);
        let tx = action_tx.clone();
        tokio::spawn(async move {
            let action = match client.top_listings(top_limit).await {
                Ok(listings) => Action::TopListingsLoaded(share(listings)),
                Err(e) => {
                    warn!(error = %e, "failed to load top listings");
                    Action::TopListingsLoadFailed
                }
            };
            let _ = tx.send(action);
        });
    }

    {
        let client = Arc::clone(client);
        let tx = action_tx.clone();
        tokio::spawn(async move {
            let action = match client.list_listings().await {
                Ok(listings) => Action::ListingsLoaded(share(listings)),
                Err(e) => {
                    warn!(error = %e, "failed to load listings");
                    Action::ListingsLoadFailed
                }
            };
            let _ = tx.send(action);
        });
    }

    {
        let client = Arc::clone(client);
        let tx = action_tx.clone();
        tokio::spawn(async move {
            let action = match client.list_agents().await {
                Ok(agents) => Action::AgentsLoaded(share(agents)),
                Err(e) => {
                    warn!(error = %e, "failed to load agents");
                    Action::AgentsLoadFailed
                }
            };
            let _ = tx.send(action);
        });
    }

    {
        let client = Arc::clone(client);
        let tx = action_tx.clone();
        tokio::spawn(async move {
            let action = match client.list_house_types().await {
                Ok(types) => Action::HouseTypesLoaded(Arc::new(types)),
                Err(e) => {
                    warn!(error = %e, "failed to load house types");
                    Action::HouseTypesLoadFailed
                }
            };
            let _ = tx.send(action);
        });
    }
}

/// Spawn a single-listing fetch for the detail popup. Fire-and-forget:
/// there is no cancellation token, so a response that arrives after the
/// popup was dismissed simply lands in the hidden detail state. Each
/// open re-fetches and fully overwrites, so the race cannot corrupt
/// anything.
pub fn spawn_detail_fetch(client: &Arc<ApiClient>, id: i64, action_tx: &UnboundedSender<Action>) {
    let client = Arc::clone(client);
    let tx = action_tx.clone();
    tokio::spawn(async move {
        let action = match client.get_listing(id).await {
            Ok(listing) => Action::ListingDetailLoaded(Arc::new(listing)),
            Err(e) => {
                warn!(error = %e, id, not_found = e.is_not_found(), "failed to load listing detail");
                Action::ListingDetailLoadFailed
            }
        };
        let _ = tx.send(action);
    });
}

fn share<T>(items: Vec<T>) -> Arc<Vec<Arc<T>>> {
    Arc::new(items.into_iter().map(Arc::new).collect())
}
