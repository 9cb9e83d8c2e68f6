use super::{ApiClient, ClientError};
use crate::models::{CreateOrderRequest, OrderResponse};

pub struct OrdersApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl OrdersApi<'_> {
    pub async fn list(&self) -> Result<Vec<OrderResponse>, ClientError> {
        self.client.get("/api/orders").await
    }

    pub async fn get(&self, id: i64) -> Result<OrderResponse, ClientError> {
        self.client.get(&format!("/api/orders/{id}")).await
    }

    #[tracing::instrument(skip(self, request), fields(restaurant_id = request.restaurant_id))]
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<OrderResponse, ClientError> {
        self.client.post("/api/orders", request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn cancel(&self, id: i64) -> Result<OrderResponse, ClientError> {
        self.client.put(&format!("/api/orders/{id}/cancel")).await
    }
}
