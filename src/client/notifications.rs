use super::{ApiClient, ClientError};
use crate::models::Notification;

pub struct NotificationsApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl NotificationsApi<'_> {
    pub async fn by_order(&self, order_id: i64) -> Result<Vec<Notification>, ClientError> {
        self.client
            .get(&format!("/api/notifications/order/{order_id}"))
            .await
    }
}
