pub mod services;

pub use services::RemoteAddressService;
