pub mod error;
pub mod leveling;
pub mod query;
pub mod service;
pub mod validation;

use roster_database::StoreBackend;

pub use error::{PlayerError, Result};
pub use query::{PageRequest, PlayerCriteria, PlayerOrder};
pub use service::PlayerService;

/// Shared state handed to every request handler.
#[derive(Clone, Debug)]
pub struct Data {
    pub players: PlayerService<StoreBackend>,
}
