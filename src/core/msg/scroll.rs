use serde::{Deserialize, Serialize};

/// Messages that move the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollMsg {
    /// Relative scroll in lines, negative is up
    ScrollBy(i32),
    HalfPageUp,
    HalfPageDown,
    ScrollToTop,
    ScrollToBottom,
}

impl ScrollMsg {
    /// Line-wise scrolling arrives in bursts from the wheel and key repeat
    pub fn is_frequent(&self) -> bool {
        matches!(self, ScrollMsg::ScrollBy(_))
    }
}
