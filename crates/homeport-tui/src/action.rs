//! All possible UI actions. Actions are the sole mechanism for state mutation.
//!
//! Data-load actions come in `…Loaded` / `…LoadFailed` pairs, one pair per
//! page region. A failed region renders its own inline error; siblings are
//! unaffected. Failure variants carry no payload — the loader logs the
//! underlying error, and each region shows its own fixed message.

use std::sync::Arc;

use homeport_core::{Agent, HouseType, Listing};

use crate::screen::ScreenId;

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    GoBack,
    ToggleHelp,

    // ── Data loads (one pair per region, completion order free) ───
    TopListingsLoaded(Arc<Vec<Arc<Listing>>>),
    TopListingsLoadFailed,
    ListingsLoaded(Arc<Vec<Arc<Listing>>>),
    ListingsLoadFailed,
    AgentsLoaded(Arc<Vec<Arc<Agent>>>),
    AgentsLoadFailed,
    HouseTypesLoaded(Arc<Vec<HouseType>>),
    HouseTypesLoadFailed,

    // ── Detail view ───────────────────────────────────────────────
    OpenListingDetail(i64),
    ListingDetailLoaded(Arc<Listing>),
    ListingDetailLoadFailed,
    CloseDetail,

    // ── Filters (Listings screen) ─────────────────────────────────
    CycleTypeFilter,
    CyclePriceFilter,
    ClearFilters,
}

impl Action {
    /// Data-load completions are broadcast to every screen, not just the
    /// active one, so an inactive region is populated before it is shown.
    pub fn is_data_load(&self) -> bool {
        matches!(
            self,
            Self::TopListingsLoaded(_)
                | Self::TopListingsLoadFailed
                | Self::ListingsLoaded(_)
                | Self::ListingsLoadFailed
                | Self::AgentsLoaded(_)
                | Self::AgentsLoadFailed
                | Self::HouseTypesLoaded(_)
                | Self::HouseTypesLoadFailed
        )
    }
}
