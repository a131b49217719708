use anyhow::Context as _;

use crate::{
    database::Database,
    model::player::{Player, Profession, Race},
};

#[derive(sqlx::FromRow)]
struct PlayerRow {
    id: i64,
    name: String,
    title: String,
    race: String,
    profession: String,
    birthday: i64,
    banned: bool,
    experience: i32,
    level: i32,
    until_next_level: i32,
}

/// Load every stored player. No filtering happens in SQL.
pub async fn load_all_players(db: &Database) -> anyhow::Result<Vec<Player>> {
    let rows: Vec<PlayerRow> = sqlx::query_as(
        "SELECT id, name, title, race, profession, birthday, banned, experience, level, until_next_level
         FROM players",
    )
    .fetch_all(db.pool())
    .await
    .context("failed to load players")?;

    rows.into_iter().map(to_player).collect()
}

/// Insert a player without an id, or upsert one that already has an id.
pub async fn save_player(db: &Database, player: &Player) -> anyhow::Result<Player> {
    let row: PlayerRow = match player.id {
        None => sqlx::query_as(
            "INSERT INTO players (
                name,
                title,
                race,
                profession,
                birthday,
                banned,
                experience,
                level,
                until_next_level
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, name, title, race, profession, birthday, banned, experience, level, until_next_level",
        )
        .bind(&player.name)
        .bind(&player.title)
        .bind(player.race.as_str())
        .bind(player.profession.as_str())
        .bind(player.birthday)
        .bind(player.banned)
        .bind(player.experience)
        .bind(player.level)
        .bind(player.until_next_level)
        .fetch_one(db.pool())
        .await
        .context("failed to insert player")?,
        Some(id) => sqlx::query_as(
            "INSERT INTO players (
                id,
                name,
                title,
                race,
                profession,
                birthday,
                banned,
                experience,
                level,
                until_next_level
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                title = EXCLUDED.title,
                race = EXCLUDED.race,
                profession = EXCLUDED.profession,
                birthday = EXCLUDED.birthday,
                banned = EXCLUDED.banned,
                experience = EXCLUDED.experience,
                level = EXCLUDED.level,
                until_next_level = EXCLUDED.until_next_level
             RETURNING id, name, title, race, profession, birthday, banned, experience, level, until_next_level",
        )
        .bind(id)
        .bind(&player.name)
        .bind(&player.title)
        .bind(player.race.as_str())
        .bind(player.profession.as_str())
        .bind(player.birthday)
        .bind(player.banned)
        .bind(player.experience)
        .bind(player.level)
        .bind(player.until_next_level)
        .fetch_one(db.pool())
        .await
        .with_context(|| format!("failed to update player {id}"))?,
    };

    to_player(row)
}

pub async fn delete_player_by_id(db: &Database, id: i64) -> anyhow::Result<u64> {
    let deleted = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(id)
        .execute(db.pool())
        .await
        .with_context(|| format!("failed to delete player {id}"))?
        .rows_affected();

    Ok(deleted)
}

fn to_player(row: PlayerRow) -> anyhow::Result<Player> {
    let race = row
        .race
        .parse::<Race>()
        .with_context(|| format!("player {} has an invalid race", row.id))?;
    let profession = row
        .profession
        .parse::<Profession>()
        .with_context(|| format!("player {} has an invalid profession", row.id))?;

    Ok(Player {
        id: Some(row.id),
        name: row.name,
        title: row.title,
        race,
        profession,
        birthday: row.birthday,
        banned: row.banned,
        experience: row.experience,
        level: row.level,
        until_next_level: row.until_next_level,
    })
}

#[cfg(test)]
mod tests {
    use super::{PlayerRow, to_player};
    use crate::model::player::{Profession, Race};

    fn row(race: &str, profession: &str) -> PlayerRow {
        PlayerRow {
            id: 7,
            name: "Ishtar".to_owned(),
            title: "Moon Warden".to_owned(),
            race: race.to_owned(),
            profession: profession.to_owned(),
            birthday: 1_262_304_000_000,
            banned: true,
            experience: 300,
            level: 2,
            until_next_level: 300,
        }
    }

    #[test]
    fn converts_rows_into_players() {
        let player = to_player(row("ELF", "DRUID")).unwrap();

        assert_eq!(player.id, Some(7));
        assert_eq!(player.race, Race::Elf);
        assert_eq!(player.profession, Profession::Druid);
        assert_eq!(player.birthday, 1_262_304_000_000);
        assert!(player.banned);
        assert_eq!(player.level, 2);
        assert_eq!(player.until_next_level, 300);
    }

    #[test]
    fn rejects_unknown_stored_race() {
        let err = to_player(row("elf", "DRUID")).unwrap_err();
        assert_eq!(err.to_string(), "player 7 has an invalid race");
        assert_eq!(err.root_cause().to_string(), "unknown race `elf`");
    }

    #[test]
    fn rejects_unknown_stored_profession() {
        let err = to_player(row("ELF", "BARD")).unwrap_err();
        assert_eq!(err.to_string(), "player 7 has an invalid profession");
    }
}
