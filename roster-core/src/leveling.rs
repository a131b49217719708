use roster_database::model::Player;

/// Level reached with `experience` points:
/// `floor((sqrt(2500 + 200 * experience) - 50) / 100)`.
pub fn level_for_experience(experience: i32) -> i32 {
    let experience = f64::from(experience);
    let level = (((2500.0 + 200.0 * experience).sqrt() - 50.0) / 100.0).floor();

    // `as` saturates; NaN from very negative experience becomes 0.
    level as i32
}

/// Experience still missing until `level + 1`:
/// `50 * (level + 1) * (level + 2) - experience`.
pub fn until_next_level(level: i32, experience: i32) -> i32 {
    let level = i128::from(level);
    let missing = 50 * (level + 1) * (level + 2) - i128::from(experience);

    i32::try_from(missing).unwrap_or(if missing < 0 { i32::MIN } else { i32::MAX })
}

/// Recompute the derived fields from the player's current experience.
/// The level is set first and the remainder is computed from the new level.
pub fn apply_progress(player: &mut Player) {
    player.level = level_for_experience(player.experience);
    player.until_next_level = until_next_level(player.level, player.experience);
}
