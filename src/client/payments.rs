use super::{ApiClient, ClientError};
use crate::models::Payment;

pub struct PaymentsApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl PaymentsApi<'_> {
    pub async fn by_order(&self, order_id: i64) -> Result<Payment, ClientError> {
        self.client
            .get(&format!("/api/payments/order/{order_id}"))
            .await
    }
}
