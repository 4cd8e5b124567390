pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use middleware::ClientIp;
pub use routes::create_router;
pub use state::AppState;
