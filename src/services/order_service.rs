use crate::error::AppResult;
use crate::models::Order;
use crate::services::api_client::ApiClient;
use crate::services::collection_sync::CollectionSync;
use crate::state::OrderList;
use crate::utils::constants::ORDERS_PATH;

/// Orders list synchronizer (`GET /orders`).
#[derive(Clone)]
pub struct OrderService {
    sync: CollectionSync<Order>,
}

impl OrderService {
    pub fn new(api: ApiClient, orders: OrderList) -> Self {
        Self {
            sync: CollectionSync::new(api, ORDERS_PATH, orders),
        }
    }

    pub async fn fetch_orders(&self) -> AppResult<usize> {
        self.sync.fetch().await
    }

    pub fn orders(&self) -> &OrderList {
        self.sync.container()
    }

    pub fn find_by_order_no(&self, order_no: &str) -> Option<Order> {
        self.orders()
            .with_items(|orders| orders.iter().find(|o| o.order_no == order_no).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::router::Route;
    use crate::test_support::TestHarness;

    const ONE_ORDER: &str = r#"{"orders": [{"order_no": "1001", "phone": "555"}]}"#;

    fn order(no: &str, phone: &str) -> Order {
        Order {
            order_no: no.into(),
            phone: phone.into(),
            ..Order::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_replaces_then_failure_keeps_previous() {
        let h = TestHarness::signed_in_on(Route::App);
        h.transport.respond(ORDERS_PATH, 200, ONE_ORDER);

        assert_eq!(h.orders.fetch_orders().await, Ok(1));
        assert_eq!(h.orders.orders().items(), vec![order("1001", "555")]);
        let version = h.orders.orders().version();

        h.transport.respond(ORDERS_PATH, 500, "Server Error");
        let result = h.orders.fetch_orders().await;

        assert!(matches!(result, Err(AppError::Http { status: 500, .. })));
        assert_eq!(h.orders.orders().items(), vec![order("1001", "555")]);
        assert_eq!(h.orders.orders().version(), version);
        assert_eq!(h.alert_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_envelope_keeps_previous() {
        let h = TestHarness::signed_in_on(Route::App);
        h.transport.respond(ORDERS_PATH, 200, ONE_ORDER);
        h.orders.fetch_orders().await.unwrap();

        h.transport.respond(ORDERS_PATH, 200, r#"{"success": false, "message": "db down"}"#);
        assert_eq!(h.orders.fetch_orders().await, Err(AppError::Envelope("db down".into())));

        h.transport.respond(ORDERS_PATH, 200, "not json");
        assert!(matches!(h.orders.fetch_orders().await, Err(AppError::Parse(_))));

        assert_eq!(h.orders.orders().len(), 1);
    }

    #[tokio::test]
    async fn test_unauthorized_fetch_alerts_and_redirects_once() {
        let h = TestHarness::signed_in_on(Route::App);
        h.transport.respond(ORDERS_PATH, 200, ONE_ORDER);
        h.orders.fetch_orders().await.unwrap();

        h.transport.respond(ORDERS_PATH, 401, "");
        let result = h.orders.fetch_orders().await;

        assert_eq!(result, Err(AppError::SessionInvalid { status: 401 }));
        assert_eq!(h.alert_count(), 1);
        assert_eq!(h.router.history(), vec![Route::App, Route::SignIn]);
        assert_eq!(h.orders.orders().len(), 1);
    }

    #[tokio::test]
    async fn test_last_fetch_wins_for_every_holder() {
        let h = TestHarness::signed_in_on(Route::App);
        let other_surface = h.orders.orders().clone();

        h.transport.respond(ORDERS_PATH, 200, ONE_ORDER);
        h.orders.fetch_orders().await.unwrap();
        h.transport.respond(
            ORDERS_PATH,
            200,
            r#"{"orders": [{"order_no": "2001", "phone": "777"}, {"order_no": "2002", "phone": "888"}]}"#,
        );
        h.orders.fetch_orders().await.unwrap();

        assert_eq!(other_surface.items(), vec![order("2001", "777"), order("2002", "888")]);
        assert_eq!(other_surface.version(), 2);
        assert_eq!(h.orders.find_by_order_no("2002").map(|o| o.phone), Some("888".to_string()));
        assert!(h.orders.find_by_order_no("1001").is_none());
    }
}
