use crate::{
    config::Config,
    infrastructure::storage::traits::{AttachmentStore, DocumentStore},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub attachments: Arc<dyn AttachmentStore>,
    pub documents: Arc<dyn DocumentStore>,
}
