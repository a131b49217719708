use std::cmp::Ordering;

use serde::Deserialize;

use roster_database::model::{Player, Profession, Race};
use roster_utils::pagination;

/// Optional predicates applied conjunctively. `None` means no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerCriteria {
    /// Case-sensitive substring of the name.
    pub name: Option<String>,
    /// Case-sensitive substring of the title.
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Birthday strictly after this unix millisecond timestamp.
    pub after: Option<i64>,
    /// Birthday strictly before this unix millisecond timestamp.
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

impl PlayerCriteria {
    pub fn matches(&self, player: &Player) -> bool {
        if let Some(name) = &self.name
            && !player.name.contains(name.as_str())
        {
            return false;
        }
        if let Some(title) = &self.title
            && !player.title.contains(title.as_str())
        {
            return false;
        }
        if self.race.is_some_and(|race| player.race != race) {
            return false;
        }
        if self
            .profession
            .is_some_and(|profession| player.profession != profession)
        {
            return false;
        }
        if self.after.is_some_and(|after| player.birthday <= after) {
            return false;
        }
        if self.before.is_some_and(|before| player.birthday >= before) {
            return false;
        }
        if self.banned.is_some_and(|banned| player.banned != banned) {
            return false;
        }
        if self.min_experience.is_some_and(|min| player.experience < min) {
            return false;
        }
        if self.max_experience.is_some_and(|max| player.experience > max) {
            return false;
        }
        if self.min_level.is_some_and(|min| player.level < min) {
            return false;
        }
        if self.max_level.is_some_and(|max| player.level > max) {
            return false;
        }

        true
    }
}

/// Sort key for player listings. Always ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
}

type PlayerComparator = fn(&Player, &Player) -> Ordering;

impl PlayerOrder {
    fn comparator(self) -> PlayerComparator {
        match self {
            PlayerOrder::Id => |a, b| a.id.cmp(&b.id),
            // Unicode code point order, not UTF-16 unit order.
            PlayerOrder::Name => |a, b| a.name.cmp(&b.name),
            PlayerOrder::Experience => |a, b| a.experience.cmp(&b.experience),
            PlayerOrder::Birthday => |a, b| a.birthday.cmp(&b.birthday),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

/// Players passing every criterion, in the order they were given.
pub fn filter(all: Vec<Player>, criteria: &PlayerCriteria) -> Vec<Player> {
    all.into_iter()
        .filter(|player| criteria.matches(player))
        .collect()
}

/// Stable ascending sort by `order`, defaulting to id.
pub fn sort(mut players: Vec<Player>, order: Option<PlayerOrder>) -> Vec<Player> {
    players.sort_by(order.unwrap_or_default().comparator());
    players
}

pub fn paginate(players: Vec<Player>, page: PageRequest) -> Vec<Player> {
    pagination::paginate(players, page.page_number, page.page_size)
}
