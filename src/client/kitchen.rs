use super::{ApiClient, ClientError};
use crate::models::KitchenTicket;

pub struct KitchenApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl KitchenApi<'_> {
    /// Lists tickets, optionally narrowed to one restaurant.
    pub async fn tickets(&self, restaurant_id: Option<i64>) -> Result<Vec<KitchenTicket>, ClientError> {
        match restaurant_id {
            Some(id) => {
                self.client
                    .get(&format!("/api/kitchen/tickets?restaurantId={id}"))
                    .await
            }
            None => self.client.get("/api/kitchen/tickets").await,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn accept(&self, id: i64) -> Result<KitchenTicket, ClientError> {
        self.client.put(&format!("/api/kitchen/tickets/{id}/accept")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn preparing(&self, id: i64) -> Result<KitchenTicket, ClientError> {
        self.client.put(&format!("/api/kitchen/tickets/{id}/preparing")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn ready(&self, id: i64) -> Result<KitchenTicket, ClientError> {
        self.client.put(&format!("/api/kitchen/tickets/{id}/ready")).await
    }
}
