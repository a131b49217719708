use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::model::player::Player;

#[derive(Debug)]
struct MemoryState {
    players: BTreeMap<i64, Player>,
    next_id: i64,
}

/// Process-local player store. Clones share the same map.
#[derive(Clone, Debug)]
pub struct MemoryPlayerStore {
    state: Arc<Mutex<MemoryState>>,
}

impl Default for MemoryPlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPlayerStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState {
                players: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| anyhow::anyhow!("memory player store lock poisoned"))
    }

    /// Snapshot in id order.
    pub fn load_all(&self) -> anyhow::Result<Vec<Player>> {
        Ok(self.lock()?.players.values().cloned().collect())
    }

    pub fn save(&self, mut player: Player) -> anyhow::Result<Player> {
        let mut state = self.lock()?;

        let id = match player.id {
            Some(id) => id,
            None => state.next_id,
        };
        state.next_id = state.next_id.max(id.saturating_add(1));

        player.id = Some(id);
        state.players.insert(id, player.clone());
        Ok(player)
    }

    pub fn delete_by_id(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.lock()?.players.remove(&id).is_some())
    }
}
