use serde::{Deserialize, Serialize};

wire_enum! {
    /// Moderation and stock status of a listed product.
    ProductStatus {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
        Active => "Active",
        Inactive => "Inactive",
        InStock => "Còn hàng",
        OutOfStock => "Hết hàng",
    }
}

/// Seller summary embedded in a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSeller {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Vehicle or battery listed on the marketplace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub product_type: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub voltage: String,
    #[serde(default)]
    pub capacity: String,
    #[serde(default)]
    pub cycle_count: u32,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub year: u16,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub warranty: String,
    pub status: ProductStatus,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<ProductSeller>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Filters for `GET /api/products/admin`
///
/// Unset fields are left out of the query string entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Paginated product list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub data: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Body for `PUT /api/products/:id/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateProductStatusRequest {
    pub status: ProductStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body for `PUT /api/products/:id/approve`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApproveProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for `PUT /api/products/:id/reject`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejectProductRequest {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_type_uses_reserved_word_on_the_wire() {
        let product: Product = serde_json::from_value(json!({
            "id": "p1",
            "name": "VinFast VF e34 pack",
            "type": "battery",
            "brand": "VinFast",
            "voltage": "400V",
            "capacity": "42kWh",
            "cycleCount": 320,
            "condition": "used",
            "year": 2022,
            "location": "Da Nang",
            "warranty": "6 months",
            "status": "Còn hàng",
            "price": 95000000.0
        }))
        .unwrap();

        assert_eq!(product.product_type, "battery");
        assert_eq!(product.status, ProductStatus::InStock);
        assert!(product.images.is_empty());
    }

    #[test]
    fn approve_without_notes_is_empty_object() {
        let body = serde_json::to_value(ApproveProductRequest::default()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn filters_serialize_type_and_page_size() {
        let filters = ProductFilters {
            product_type: Some("vehicle".to_string()),
            page_size: Some(20),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            json!({ "type": "vehicle", "pageSize": 20 })
        );
    }
}
