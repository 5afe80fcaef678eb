use serde::{Deserialize, Serialize};

/// An order row from `GET /orders`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Order {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    pub order_no: String,
    #[serde(default)]
    pub cod_amount: String,
    #[serde(default)]
    pub shipping_status: Option<String>,
}
