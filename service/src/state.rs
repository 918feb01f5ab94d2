use std::sync::Arc;

use common::cloudconvert::{CloudConvertService, CloudConvertSettings};
use common::convert::IConvertService;

pub type Services = Arc<ServiceCollection>;

pub struct RelaySettings {
    pub api_key: String,
    pub api_base: String,
    pub max_upload_bytes: usize,
}

/// Everything a request handler needs, wired once at startup and passed in
/// through axum state. There is no module-level singleton.
pub struct ServiceCollection {
    pub convert_service: Arc<dyn IConvertService>,
    pub max_upload_bytes: usize,
}

impl ServiceCollection {
    pub fn build(settings: RelaySettings) -> Result<Arc<Self>, &'static str> {
        let provider = CloudConvertService::build(CloudConvertSettings {
            api_key: settings.api_key,
            api_base: settings.api_base,
        })?;
        Ok(Arc::new(ServiceCollection {
            convert_service: Arc::new(provider),
            max_upload_bytes: settings.max_upload_bytes,
        }))
    }
}
