mod memory_store;

use std::future::Future;

use tracing::debug;

use crate::database::Database;
use crate::impls::players::{delete_player_by_id, load_all_players, save_player};
use crate::model::player::Player;

pub use memory_store::MemoryPlayerStore;

/// Persistence collaborator behind the player service.
///
/// `load_all` returns a full snapshot in no particular order. `save` inserts a
/// player without an id and overwrites one that has an id, returning the
/// persisted form. `delete_by_id` does nothing for an unknown id.
pub trait PlayerStore: Send + Sync {
    fn load_all(&self) -> impl Future<Output = anyhow::Result<Vec<Player>>> + Send;

    fn save(&self, player: Player) -> impl Future<Output = anyhow::Result<Player>> + Send;

    fn delete_by_id(&self, id: i64) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl PlayerStore for MemoryPlayerStore {
    async fn load_all(&self) -> anyhow::Result<Vec<Player>> {
        MemoryPlayerStore::load_all(self)
    }

    async fn save(&self, player: Player) -> anyhow::Result<Player> {
        MemoryPlayerStore::save(self, player)
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        let removed = MemoryPlayerStore::delete_by_id(self, id)?;
        debug!(player_id = id, removed, "memory store delete");
        Ok(())
    }
}

impl PlayerStore for Database {
    async fn load_all(&self) -> anyhow::Result<Vec<Player>> {
        load_all_players(self).await
    }

    async fn save(&self, player: Player) -> anyhow::Result<Player> {
        save_player(self, &player).await
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        let deleted = delete_player_by_id(self, id).await?;
        debug!(player_id = id, deleted, "postgres store delete");
        Ok(())
    }
}

/// Store selected at startup.
#[derive(Clone, Debug)]
pub enum StoreBackend {
    Memory(MemoryPlayerStore),
    Postgres(Database),
}

impl StoreBackend {
    pub fn memory() -> Self {
        Self::Memory(MemoryPlayerStore::new())
    }

    pub fn postgres(db: Database) -> Self {
        Self::Postgres(db)
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Memory(_) => "memory",
            StoreBackend::Postgres(_) => "postgres",
        }
    }
}

impl PlayerStore for StoreBackend {
    async fn load_all(&self) -> anyhow::Result<Vec<Player>> {
        match self {
            StoreBackend::Memory(store) => PlayerStore::load_all(store).await,
            StoreBackend::Postgres(db) => PlayerStore::load_all(db).await,
        }
    }

    async fn save(&self, player: Player) -> anyhow::Result<Player> {
        match self {
            StoreBackend::Memory(store) => PlayerStore::save(store, player).await,
            StoreBackend::Postgres(db) => PlayerStore::save(db, player).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        match self {
            StoreBackend::Memory(store) => PlayerStore::delete_by_id(store, id).await,
            StoreBackend::Postgres(db) => PlayerStore::delete_by_id(db, id).await,
        }
    }
}
