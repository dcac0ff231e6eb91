use serde::Deserialize;
use uuid::Uuid;

/// Request body for creating an order.
#[derive(Debug, Deserialize)]
pub struct NewOrder {
    pub account_id: Uuid,
    #[serde(default)]
    pub order_length: i32,
    #[serde(default)]
    pub order_width: i32,
    #[serde(default)]
    pub order_height: i32,
    #[serde(default)]
    pub order_weight: i32,
    #[serde(default)]
    pub consignee_name: String,
    #[serde(default)]
    pub consignee_number: String,
    #[serde(default)]
    pub consignee_country: String,
    #[serde(default)]
    pub consignee_address: String,
    #[serde(default)]
    pub consignee_postal: String,
    #[serde(default)]
    pub consignee_state: String,
    #[serde(default)]
    pub consignee_city: String,
    #[serde(default)]
    pub consignee_province: String,
    #[serde(default)]
    pub consignee_email: String,
    #[serde(default)]
    pub pickup_contact_name: String,
    #[serde(default)]
    pub pickup_contact_number: String,
    #[serde(default)]
    pub pickup_country: String,
    #[serde(default)]
    pub pickup_address: String,
    #[serde(default)]
    pub pickup_postal: String,
    #[serde(default)]
    pub pickup_state: String,
    #[serde(default)]
    pub pickup_city: String,
    #[serde(default)]
    pub pickup_province: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}
