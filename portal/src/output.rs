//! Rendering of command results.
//!
//! JSON is the default and prints the API records unchanged. The table
//! format gives one compact line per record for list commands.

use clap::ValueEnum;
use serde::Serialize;
use shared::{
    format_file_size, format_vnd, short_id, ChatResponse, DashboardOverview, EscrowResponse,
    GetUsersResponse, Media, OrderResponse, ProductListResponse,
};

const ID_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn users_table(page: &GetUsersResponse) -> String {
    let mut lines: Vec<String> = page
        .users
        .iter()
        .map(|user| {
            format!(
                "{:<8}  {:<32}  {:<6}  {}",
                short_id(&user.id, ID_WIDTH),
                user.email,
                user.role,
                if user.is_active { "active" } else { "banned" }
            )
        })
        .collect();
    lines.push(format!(
        "page {}/{} ({} users)",
        page.page, page.total_pages, page.total
    ));
    lines.join("\n")
}

pub fn products_table(list: &ProductListResponse) -> String {
    let mut lines: Vec<String> = list
        .data
        .iter()
        .map(|product| {
            format!(
                "{:<8}  {:<10}  {:>16}  {}",
                short_id(&product.id, ID_WIDTH),
                product.status,
                format_vnd(product.price),
                product.name
            )
        })
        .collect();
    lines.push(format!(
        "page {}/{} ({} products)",
        list.page, list.total_pages, list.total
    ));
    lines.join("\n")
}

pub fn orders_table(page: &OrderResponse) -> String {
    let mut lines: Vec<String> = page
        .data
        .iter()
        .map(|order| {
            format!(
                "{:<8}  {:<10}  {:>16}  {}",
                short_id(&order.id, ID_WIDTH),
                order.status,
                format_vnd(order.total_price),
                order.created_at
            )
        })
        .collect();
    lines.push(format!(
        "page {}/{} ({} orders)",
        page.page, page.total_pages, page.total
    ));
    lines.join("\n")
}

pub fn escrows_table(list: &EscrowResponse) -> String {
    let mut lines: Vec<String> = list
        .data
        .iter()
        .map(|escrow| {
            format!(
                "{:<8}  {:<9}  {:>16}  order {}",
                short_id(&escrow.id, ID_WIDTH),
                escrow.status,
                format_vnd(escrow.total()),
                short_id(&escrow.order_id, ID_WIDTH)
            )
        })
        .collect();
    lines.push(format!(
        "{} escrows, {} total, {} held",
        list.total,
        format_vnd(list.total_amount()),
        format_vnd(list.held_amount())
    ));
    lines.join("\n")
}

pub fn chats_table(list: &ChatResponse) -> String {
    let mut lines: Vec<String> = list
        .data
        .iter()
        .map(|chat| {
            let preview = chat
                .last_message
                .as_ref()
                .map(|m| m.content.as_str())
                .unwrap_or("");
            format!(
                "{:<8}  {:>3} unread  {}  {}",
                short_id(&chat.id, ID_WIDTH),
                chat.unread_count,
                chat.participants.join(","),
                preview
            )
        })
        .collect();
    lines.push(format!("{} chats", list.total));
    lines.join("\n")
}

pub fn media_table(media: &Media) -> String {
    format!(
        "{}  {}  {}  {}  {}",
        short_id(&media.id, ID_WIDTH),
        media.category,
        media.file_type,
        format_file_size(media.file_size),
        media.url
    )
}

pub fn overview_table(overview: &DashboardOverview) -> String {
    [
        format!(
            "users     {} total, {} active, {} new this week",
            overview.users.total_users, overview.users.active_users, overview.users.new_users_this_week
        ),
        format!(
            "products  {} total, {} pending, {} sold",
            overview.products.total_products,
            overview.products.pending_products,
            overview.products.sold_products
        ),
        format!(
            "orders    {} total, {} pending, {} completed",
            overview.orders.total_orders,
            overview.orders.pending_orders,
            overview.orders.completed_orders
        ),
        format!(
            "revenue   {} today, {} this month, {} overall",
            format_vnd(overview.revenue.today_revenue),
            format_vnd(overview.revenue.month_revenue),
            format_vnd(overview.revenue.total_revenue)
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn users_table_has_line_per_user_and_footer() {
        let page: GetUsersResponse = serde_json::from_value(json!({
            "users": [
                { "id": "64b7f0c2aa11", "email": "a@evmarket.vn", "role": "Admin", "isActive": true },
                { "id": "64b7f0c2bb22", "email": "b@evmarket.vn", "role": "User", "isActive": false }
            ],
            "total": 2, "page": 1, "limit": 10, "totalPages": 1
        }))
        .unwrap();

        let table = users_table(&page);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("64b7f0c2"));
        assert!(lines[1].ends_with("banned"));
        assert_eq!(lines[2], "page 1/1 (2 users)");
    }

    #[test]
    fn escrow_footer_sums_amounts() {
        let list: EscrowResponse = serde_json::from_value(json!({
            "data": [{
                "id": "e1", "orderId": "o1", "buyerId": "b", "sellerId": "s",
                "amountTotal": 1250000.0, "amountHold": 1250000.0, "status": "held",
                "createdAt": "", "updatedAt": ""
            }],
            "total": 1
        }))
        .unwrap();

        let table = escrows_table(&list);
        assert!(table.ends_with("1 escrows, 1.250.000 đ total, 1.250.000 đ held"));
    }
}
