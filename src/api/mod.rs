pub mod error;
pub mod response;
pub mod route;
pub mod view;

pub use route::create_router;
