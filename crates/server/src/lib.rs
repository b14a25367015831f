pub mod errors;
pub mod routes;
pub mod startup;

pub use startup::run;

use sea_orm::DatabaseConnection;

/// Shared handle passed into the route table; constructed once at startup
/// and injected explicitly instead of living in a global.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}
