use roster_database::model::{NewPlayer, Player};
use roster_utils::time::year_of_unix_millis;

use crate::error::{PlayerError, Result};

pub const MAX_NAME_CHARS: usize = 12;
pub const MAX_TITLE_CHARS: usize = 30;
pub const MIN_BIRTH_YEAR: i32 = 2000;
pub const MAX_BIRTH_YEAR: i32 = 3000;
pub const MAX_EXPERIENCE: i32 = 10_000_000;

/// Accept only a present, positive player id.
pub fn checked_id(id: Option<i64>) -> Result<i64> {
    match id {
        Some(id) if id > 0 => Ok(id),
        Some(id) => Err(PlayerError::bad_request(format!(
            "player id must be positive, got {id}"
        ))),
        None => Err(PlayerError::bad_request("player id is missing or malformed")),
    }
}

/// Field rules shared by create and experience-changing updates.
pub fn validate_fields(
    name: Option<&str>,
    title: Option<&str>,
    birthday: Option<i64>,
    experience: Option<i32>,
) -> Result<()> {
    check_text("name", name, MAX_NAME_CHARS)?;
    check_text("title", title, MAX_TITLE_CHARS)?;

    let Some(birthday) = birthday else {
        return Err(PlayerError::bad_request("birthday is required"));
    };
    match year_of_unix_millis(birthday) {
        Some(year) if (MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&year) => {}
        _ => {
            return Err(PlayerError::bad_request(format!(
                "birthday year must be within {MIN_BIRTH_YEAR}..={MAX_BIRTH_YEAR}"
            )));
        }
    }

    match experience {
        Some(experience) if (0..=MAX_EXPERIENCE).contains(&experience) => Ok(()),
        Some(_) => Err(PlayerError::bad_request(format!(
            "experience must be within 0..={MAX_EXPERIENCE}"
        ))),
        None => Err(PlayerError::bad_request("experience is required")),
    }
}

pub fn validate_player(player: &Player) -> Result<()> {
    validate_fields(
        Some(player.name.as_str()),
        Some(player.title.as_str()),
        Some(player.birthday),
        Some(player.experience),
    )
}

/// Validate a create payload and turn it into an unsaved player.
///
/// Derived fields are left at zero; the caller computes them.
pub fn validate_new_player(input: NewPlayer) -> Result<Player> {
    validate_fields(
        input.name.as_deref(),
        input.title.as_deref(),
        input.birthday,
        input.experience,
    )?;

    let (Some(name), Some(title), Some(birthday), Some(experience)) =
        (input.name, input.title, input.birthday, input.experience)
    else {
        return Err(PlayerError::bad_request("incomplete player"));
    };
    let race = input
        .race
        .ok_or_else(|| PlayerError::bad_request("race is required"))?;
    let profession = input
        .profession
        .ok_or_else(|| PlayerError::bad_request("profession is required"))?;

    Ok(Player {
        id: None,
        name,
        title,
        race,
        profession,
        birthday,
        banned: input.banned.unwrap_or(false),
        experience,
        level: 0,
        until_next_level: 0,
    })
}

fn check_text(field: &str, value: Option<&str>, max_chars: usize) -> Result<()> {
    let Some(value) = value else {
        return Err(PlayerError::bad_request(format!("{field} is required")));
    };

    let chars = value.chars().count();
    if chars == 0 {
        return Err(PlayerError::bad_request(format!("{field} must not be empty")));
    }
    if chars > max_chars {
        return Err(PlayerError::bad_request(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }

    Ok(())
}
