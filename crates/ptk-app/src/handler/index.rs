//! Catalog view input handlers

use ptk_core::CategoryFilter;

use crate::message::IndexMessage;
use crate::state::IndexState;

/// Apply an input change; the host re-renders with [`IndexState::view`]
pub fn update_index(state: &mut IndexState, message: IndexMessage) {
    match message {
        IndexMessage::QueryChanged(query) => state.query = query,
        IndexMessage::CategoryChanged(value) => state.category = CategoryFilter::parse(&value),
    }
}
