use super::{ApiClient, ClientError};
use crate::models::{MenuItem, Restaurant};

pub struct RestaurantsApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl RestaurantsApi<'_> {
    pub async fn list(&self) -> Result<Vec<Restaurant>, ClientError> {
        self.client.get("/api/restaurants").await
    }

    pub async fn get(&self, id: i64) -> Result<Restaurant, ClientError> {
        self.client.get(&format!("/api/restaurants/{id}")).await
    }

    pub async fn menu(&self, id: i64) -> Result<Vec<MenuItem>, ClientError> {
        self.client.get(&format!("/api/restaurants/{id}/menu")).await
    }
}
