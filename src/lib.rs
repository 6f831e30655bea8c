pub mod config;
pub mod error;
pub mod service;
pub mod router;
pub mod middleware;
pub mod handlers;
pub mod db;

pub use config::Config;
pub use error::NamestoreError;
pub use router::{NamestoreState, namestore_router};
