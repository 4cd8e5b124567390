pub mod client_ip;

pub use client_ip::{resolve_client_ip, ClientIp};
