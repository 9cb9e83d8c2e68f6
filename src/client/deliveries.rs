use super::{ApiClient, ClientError};
use crate::models::{Courier, Delivery};

pub struct DeliveriesApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl DeliveriesApi<'_> {
    pub async fn list(&self) -> Result<Vec<Delivery>, ClientError> {
        self.client.get("/api/deliveries").await
    }

    pub async fn by_courier(&self, courier_id: i64) -> Result<Vec<Delivery>, ClientError> {
        self.client
            .get(&format!("/api/deliveries/courier/{courier_id}"))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn assign(&self, id: i64, courier_id: i64) -> Result<Delivery, ClientError> {
        self.client
            .put(&format!("/api/deliveries/{id}/assign/{courier_id}"))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn pickup(&self, id: i64) -> Result<Delivery, ClientError> {
        self.client.put(&format!("/api/deliveries/{id}/pickup")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn deliver(&self, id: i64) -> Result<Delivery, ClientError> {
        self.client.put(&format!("/api/deliveries/{id}/deliver")).await
    }

    // Couriers are served by the delivery service.
    pub async fn couriers(&self) -> Result<Vec<Courier>, ClientError> {
        self.client.get("/api/couriers").await
    }

    pub async fn courier(&self, id: i64) -> Result<Courier, ClientError> {
        self.client.get(&format!("/api/couriers/{id}")).await
    }
}
