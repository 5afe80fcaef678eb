use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// `{success, data: [...]}` as sent by `/getMaps`, or `{orders: [...]}` as
/// sent by `/orders`. `success` is optional because `/orders` omits it.
#[derive(Deserialize, Debug)]
pub struct CollectionEnvelope<T> {
    pub success: Option<bool>,
    #[serde(alias = "orders")]
    pub data: Option<Vec<T>>,
    pub message: Option<String>,
}

impl<T> CollectionEnvelope<T> {
    /// Items of a well-formed success envelope.
    pub fn into_items(self) -> AppResult<Vec<T>> {
        if self.success == Some(false) {
            return Err(AppError::Envelope(
                self.message.unwrap_or_else(|| "server reported success=false".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| AppError::Envelope("response has no data array".to_string()))
    }
}
