pub mod config;
pub mod delivery;
pub mod lookup;
pub mod scan;

pub use config::ConfigError;
pub use delivery::DeliveryError;
pub use lookup::LookupError;
pub use scan::ScanError;

use models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
