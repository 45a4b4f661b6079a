use serde::{Deserialize, Serialize};

wire_enum! {
    /// Lifecycle status of an escrow hold.
    EscrowStatus {
        Held => "held",
        Released => "released",
        Refunded => "refunded",
        Disputed => "disputed",
    }
}

/// Payment provider details attached to an escrow
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EscrowPayment {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub payment_intent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_at: Option<String>,
}

/// Entry of an escrow's event history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EscrowEvent {
    #[serde(default)]
    pub description: String,
    pub at: String,
}

/// Funds held between buyer and seller for one order
///
/// Older servers report a single `amount`; newer ones split it into
/// `amountTotal` and `amountHold`. Use [`Escrow::total`] and
/// [`Escrow::held`] to read either.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Escrow {
    pub id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub buyer_id: String,
    #[serde(default)]
    pub seller_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_hold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub status: EscrowStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<EscrowPayment>,
    #[serde(default)]
    pub events: Vec<EscrowEvent>,
}

impl Escrow {
    pub fn total(&self) -> f64 {
        self.amount_total.or(self.amount).unwrap_or_default()
    }

    pub fn held(&self) -> f64 {
        match self.status {
            EscrowStatus::Held => self.amount_hold.unwrap_or_else(|| self.total()),
            _ => 0.0,
        }
    }
}

/// Escrow list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EscrowResponse {
    pub data: Vec<Escrow>,
    #[serde(default)]
    pub total: u64,
}

impl EscrowResponse {
    /// Sum of all escrow totals in this page.
    pub fn total_amount(&self) -> f64 {
        self.data.iter().map(Escrow::total).sum()
    }

    /// Sum of amounts still held.
    pub fn held_amount(&self) -> f64 {
        self.data.iter().map(Escrow::held).sum()
    }
}

/// Filters for `GET /api/escrows`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EscrowFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EscrowStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Body for `POST /api/escrows/:id/release`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseEscrowRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn escrow(status: &str, total: f64, hold: f64) -> serde_json::Value {
        json!({
            "id": "e1",
            "orderId": "o1",
            "buyerId": "b1",
            "sellerId": "s1",
            "amountTotal": total,
            "amountHold": hold,
            "currency": "VND",
            "status": status,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        })
    }

    #[test]
    fn held_amount_only_counts_held_escrows() {
        let page: EscrowResponse = serde_json::from_value(json!({
            "data": [escrow("held", 100.0, 80.0), escrow("released", 50.0, 0.0)],
            "total": 2
        }))
        .unwrap();

        assert_eq!(page.total_amount(), 150.0);
        assert_eq!(page.held_amount(), 80.0);
    }

    #[test]
    fn legacy_amount_is_used_as_total() {
        let escrow: Escrow = serde_json::from_value(json!({
            "id": "e2",
            "orderId": "o2",
            "buyerId": "b1",
            "sellerId": "s1",
            "amount": 42.0,
            "status": "held",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(escrow.total(), 42.0);
        assert_eq!(escrow.held(), 42.0);
        assert!(escrow.events.is_empty());
    }
}
