// ── Filter predicates over listing snapshots ──
//
// Used by the TUI to narrow the full fetched set without re-querying
// the API. Recomputation is synchronous and replaces the filtered
// subset wholesale.

use std::sync::Arc;

use homeport_api::Listing;

/// Price bracket for the price filter. The set of brackets is fixed;
/// each is a half-open interval except the top one, which is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBracket {
    /// Below 300,000.
    Under300k,
    /// 300,000 up to (excluding) 600,000.
    From300kTo600k,
    /// 600,000 up to (excluding) 1,000,000.
    From600kTo1m,
    /// 1,000,000 and above.
    OnePlusMillion,
}

impl PriceBracket {
    /// All brackets in ascending order, for cycling through the filter UI.
    pub const ALL: [PriceBracket; 4] = [
        Self::Under300k,
        Self::From300kTo600k,
        Self::From600kTo1m,
        Self::OnePlusMillion,
    ];

    /// Whether `price` falls inside this bracket.
    pub fn contains(self, price: f64) -> bool {
        match self {
            Self::Under300k => price < 300_000.0,
            Self::From300kTo600k => (300_000.0..600_000.0).contains(&price),
            Self::From600kTo1m => (600_000.0..1_000_000.0).contains(&price),
            Self::OnePlusMillion => price >= 1_000_000.0,
        }
    }

    /// Parse a wire/UI token. Unrecognized tokens are `None`, which
    /// callers treat as "no constraint", never as an error.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "0-300000" => Some(Self::Under300k),
            "300000-600000" => Some(Self::From300kTo600k),
            "600000-1000000" => Some(Self::From600kTo1m),
            "1000000+" => Some(Self::OnePlusMillion),
            _ => None,
        }
    }

    /// Short label for the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Under300k => "< $300k",
            Self::From300kTo600k => "$300k – $600k",
            Self::From600kTo1m => "$600k – $1M",
            Self::OnePlusMillion => "$1M+",
        }
    }
}

/// Active filter criteria. Unset fields impose no constraint.
///
/// Owned by the view layer; persists across repeated filter changes
/// until explicitly cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterCriteria {
    /// Category (house type) id equality match.
    pub house_type: Option<i64>,
    /// Price bracket membership test.
    pub price: Option<PriceBracket>,
}

impl FilterCriteria {
    pub fn is_empty(self) -> bool {
        self.house_type.is_none() && self.price.is_none()
    }

    /// Whether `listing` passes every set criterion.
    pub fn matches(self, listing: &Listing) -> bool {
        let type_ok = self
            .house_type
            .is_none_or(|type_id| listing.house_type_id == type_id);
        let price_ok = self
            .price
            .is_none_or(|bracket| bracket.contains(listing.price));
        type_ok && price_ok
    }
}

/// Pure recomputation of the filtered subset. Never mutates the input;
/// preserves the input order.
pub fn filter_listings(all: &[Arc<Listing>], criteria: FilterCriteria) -> Vec<Arc<Listing>> {
    all.iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}
