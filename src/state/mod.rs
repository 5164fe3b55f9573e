//! State management for page builds
//!
//! This module tracks where each page is in the fetch → cache → transform
//! pipeline and which moves between states are legal.

mod page_state;

pub use page_state::PageState;
