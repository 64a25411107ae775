pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod sitemap;
pub mod videos;

pub use routes::create_router;
