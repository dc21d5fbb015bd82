//! Path segment parsing shared by the movie routes.
//!
//! Segments are taken as raw strings so that malformed values produce the
//! regular failure envelope instead of actix's plain-text 404.

use crate::movie::application::ports::outgoing::{PageRequest, MAX_PAGE};

/// Record ids are positive integers.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

/// Page numbers are 1-based integers no larger than [`MAX_PAGE`].
pub fn parse_page(raw: &str) -> Option<PageRequest> {
    raw.trim().parse::<u64>().ok().and_then(PageRequest::new)
}
