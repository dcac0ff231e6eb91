use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Shipping order record: parcel dimensions plus the consignee and
/// pickup contact blocks.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub account_id: Uuid,
    pub order_length: i32,
    pub order_width: i32,
    pub order_height: i32,
    pub order_weight: i32,
    pub consignee_name: String,
    pub consignee_number: String,
    pub consignee_country: String,
    pub consignee_address: String,
    pub consignee_postal: String,
    pub consignee_state: String,
    pub consignee_city: String,
    pub consignee_province: String,
    pub consignee_email: String,
    pub pickup_contact_name: String,
    pub pickup_contact_number: String,
    pub pickup_country: String,
    pub pickup_address: String,
    pub pickup_postal: String,
    pub pickup_state: String,
    pub pickup_city: String,
    pub pickup_province: String,
    pub due_date: String,
    pub completed: bool,
    pub created_at: OffsetDateTime,
}
