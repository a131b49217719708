use tracing::{debug, info};

use roster_database::PlayerStore;
use roster_database::model::{NewPlayer, Player, PlayerPatch};

use crate::error::{PlayerError, Result};
use crate::leveling::apply_progress;
use crate::query::{self, PageRequest, PlayerCriteria, PlayerOrder};
use crate::validation::{checked_id, validate_new_player, validate_player};

/// Player queries and writes on top of a [`PlayerStore`].
///
/// Holds no per-call state: every query reloads the full collection and
/// builds its working set from scratch.
#[derive(Clone, Debug)]
pub struct PlayerService<S> {
    store: S,
}

impl<S: PlayerStore> PlayerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Filter, sort, then cut out the requested page.
    pub async fn list(
        &self,
        criteria: &PlayerCriteria,
        order: Option<PlayerOrder>,
        page: PageRequest,
    ) -> Result<Vec<Player>> {
        let matching = self.filtered(criteria).await?;
        let total = matching.len();
        let players = query::paginate(query::sort(matching, order), page);

        debug!(
            total,
            returned = players.len(),
            ?order,
            page_number = page.page_number,
            page_size = page.page_size,
            "listed players"
        );
        Ok(players)
    }

    /// Number of players matching `criteria`, ignoring order and paging.
    pub async fn count(&self, criteria: &PlayerCriteria) -> Result<usize> {
        Ok(self.filtered(criteria).await?.len())
    }

    pub async fn create(&self, input: NewPlayer) -> Result<Player> {
        let mut player = validate_new_player(input)?;
        apply_progress(&mut player);

        let created = self.store.save(player).await?;
        info!(
            player_id = created.id,
            level = created.level,
            "player created"
        );
        Ok(created)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Player> {
        let id = checked_id(Some(id))?;

        self.store
            .load_all()
            .await?
            .into_iter()
            .find(|player| player.id == Some(id))
            .ok_or(PlayerError::NotFound(id))
    }

    /// Apply `patch` to the stored player.
    ///
    /// Only a changed experience value triggers re-derivation, validation and
    /// a store write. Other fields are overwritten on the returned copy but
    /// are not persisted on their own, and are not re-validated.
    // FIXME: edits without an experience change never reach the store. Kept
    // until product confirms whether plain edits should be saved.
    pub async fn update(&self, patch: PlayerPatch, id: i64) -> Result<Player> {
        let mut player = self.get_by_id(id).await?;

        if let Some(name) = patch.name {
            player.name = name;
        }
        if let Some(title) = patch.title {
            player.title = title;
        }
        if let Some(race) = patch.race {
            player.race = race;
        }
        if let Some(profession) = patch.profession {
            player.profession = profession;
        }
        if let Some(birthday) = patch.birthday {
            player.birthday = birthday;
        }
        if let Some(banned) = patch.banned {
            player.banned = banned;
        }

        match patch.experience {
            Some(experience) if experience != player.experience => {
                player.experience = experience;
                apply_progress(&mut player);
                validate_player(&player)?;

                let saved = self.store.save(player).await?;
                info!(
                    player_id = id,
                    experience = saved.experience,
                    level = saved.level,
                    "player progress updated"
                );
                Ok(saved)
            }
            _ => {
                debug!(player_id = id, "player updated without experience change; not persisted");
                Ok(player)
            }
        }
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let player = self.get_by_id(id).await?;
        self.store.delete_by_id(id).await?;

        info!(player_id = id, name = %player.name, "player deleted");
        Ok(())
    }

    async fn filtered(&self, criteria: &PlayerCriteria) -> Result<Vec<Player>> {
        let all = self.store.load_all().await?;
        Ok(query::filter(all, criteria))
    }
}
