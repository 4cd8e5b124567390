mod remote_address_service;

pub use remote_address_service::RemoteAddressService;
