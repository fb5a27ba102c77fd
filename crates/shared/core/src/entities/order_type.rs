use serde::{Deserialize, Serialize};

/// Order types accepted by the trade endpoint
///
/// Only fill-or-kill is submitted by this client: the order executes
/// immediately at full size at the quoted price, or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Fill or Kill
    #[serde(rename = "FOK")]
    FillOrKill,
}
