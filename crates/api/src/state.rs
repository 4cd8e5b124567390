use realip_application::RemoteAddressService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RemoteAddressService>,
}
