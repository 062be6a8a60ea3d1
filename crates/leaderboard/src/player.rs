//! The player row shown on the leaderboard.

use leaderboard_macros::Record;
use serde::{Deserialize, Serialize};

/// One player's leaderboard row.
///
/// Serialized field names are camelCase, and so are the sort field names
/// the query engine accepts (`winRate`, `lastActive`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(rename_all = "camelCase")]
pub struct Player {
    #[record(String)]
    pub id: String,
    #[record(String, searchable)]
    pub username: String,
    #[record(Number)]
    pub rank: u32,
    #[record(Number)]
    pub score: i64,
    #[record(Number)]
    pub wins: u32,
    #[record(Number)]
    pub losses: u32,
    /// Percentage, `0.0..=100.0`.
    #[record(Number)]
    pub win_rate: f64,
    #[record(Number)]
    pub average_score: u32,
    #[record(Number)]
    pub games_played: u32,
    /// RFC 3339 timestamp.
    #[record(Date)]
    pub last_active: String,
    #[record(String, searchable)]
    pub country: String,
    #[record(Number)]
    pub level: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaderboard_query::{FieldKind, Record};

    const SAMPLE: &str = r#"{
        "id": "player-1",
        "username": "ShadowHunter42",
        "rank": 1,
        "score": 14820,
        "wins": 412,
        "losses": 101,
        "winRate": 80,
        "averageScore": 5123,
        "gamesPlayed": 513,
        "lastActive": "2024-05-01T10:15:00.000Z",
        "country": "KR",
        "level": 97
    }"#;

    #[test]
    fn deserializes_camel_case() {
        let player: Player = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(player.username, "ShadowHunter42");
        assert_eq!(player.win_rate, 80.0);
        assert_eq!(player.games_played, 513);
    }

    #[test]
    fn schema_matches_serialized_names() {
        let player: Player = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_value(&player).unwrap();

        for def in Player::schema().fields() {
            assert!(json.get(def.name).is_some(), "missing {}", def.name);
        }
        assert_eq!(Player::schema().fields().len(), 12);
        assert_eq!(
            Player::schema().field(Player::LAST_ACTIVE).unwrap().kind,
            FieldKind::Date
        );
    }

    #[test]
    fn searches_username_and_country_only() {
        let searchable: Vec<&str> = Player::schema().searchable().map(|f| f.name).collect();
        assert_eq!(searchable, [Player::USERNAME, Player::COUNTRY]);
    }
}
