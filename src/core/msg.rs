use serde::{Deserialize, Serialize};

pub mod feed;
pub mod scroll;
pub mod system;

use feed::FeedMsg;
use scroll::ScrollMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Scroll position (delegated to ViewportState)
    Scroll(ScrollMsg),

    // Paging, selection and focus
    Feed(FeedMsg),
}

impl Msg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Scroll(scroll_msg) => scroll_msg.is_frequent(),
            Msg::System(_) | Msg::Feed(_) => false,
        }
    }
}
