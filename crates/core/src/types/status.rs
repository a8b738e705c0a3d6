//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// Status of a historical order.
///
/// The serialized names match the values persisted by earlier clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order was canceled before payment.
    #[serde(rename = "cancelado")]
    Canceled,
    /// Order was delivered and closed.
    #[serde(rename = "finalizado")]
    Completed,
    /// Order is being prepared or delivered.
    #[serde(rename = "andamento")]
    InProgress,
}

impl OrderStatus {
    /// Customer-facing label (pt-BR).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Canceled => "Cancelado sem pagamento",
            Self::Completed => "Finalizado",
            Self::InProgress => "Em andamento",
        }
    }
}
