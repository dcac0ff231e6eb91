use crate::orders::dto::NewOrder;
use crate::orders::repo_types::Order;
use sqlx::PgPool;

const ORDER_COLUMNS: &str = "id, account_id, order_length, order_width, order_height, \
     order_weight, consignee_name, consignee_number, consignee_country, consignee_address, \
     consignee_postal, consignee_state, consignee_city, consignee_province, consignee_email, \
     pickup_contact_name, pickup_contact_number, pickup_country, pickup_address, pickup_postal, \
     pickup_state, pickup_city, pickup_province, due_date, completed, created_at";

impl Order {
    /// All orders, oldest first.
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at"
        ))
        .fetch_all(db)
        .await?;
        Ok(orders)
    }

    /// Insert a new order and return the stored record.
    pub async fn create(db: &PgPool, new: &NewOrder) -> anyhow::Result<Order> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "INSERT INTO orders (account_id, order_length, order_width, order_height, \
             order_weight, consignee_name, consignee_number, consignee_country, \
             consignee_address, consignee_postal, consignee_state, consignee_city, \
             consignee_province, consignee_email, pickup_contact_name, pickup_contact_number, \
             pickup_country, pickup_address, pickup_postal, pickup_state, pickup_city, \
             pickup_province, due_date, completed) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
             $17, $18, $19, $20, $21, $22, $23, $24) \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(new.account_id)
        .bind(new.order_length)
        .bind(new.order_width)
        .bind(new.order_height)
        .bind(new.order_weight)
        .bind(&new.consignee_name)
        .bind(&new.consignee_number)
        .bind(&new.consignee_country)
        .bind(&new.consignee_address)
        .bind(&new.consignee_postal)
        .bind(&new.consignee_state)
        .bind(&new.consignee_city)
        .bind(&new.consignee_province)
        .bind(&new.consignee_email)
        .bind(&new.pickup_contact_name)
        .bind(&new.pickup_contact_number)
        .bind(&new.pickup_country)
        .bind(&new.pickup_address)
        .bind(&new.pickup_postal)
        .bind(&new.pickup_state)
        .bind(&new.pickup_city)
        .bind(&new.pickup_province)
        .bind(&new.due_date)
        .bind(new.completed)
        .fetch_one(db)
        .await?;
        Ok(order)
    }
}
