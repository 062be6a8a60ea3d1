//! Viewer runs over player files on disk.

use std::fs;

use clap::Parser;
use leaderboard::{load_config, load_players, run_with, Cli, Player};
use leaderboard_query::{Dir, LeaderboardConfig, QueryError};
use tempfile::TempDir;

fn players_json(count: u32) -> String {
    let countries = ["US", "KR", "DE", "BR"];
    let players: Vec<serde_json::Value> = (1..=count)
        .map(|n| {
            serde_json::json!({
                "id": format!("player-{}", n),
                "username": format!("Storm{}", n),
                "rank": n,
                "score": 20000 - i64::from(n) * 100,
                "wins": 100 + n,
                "losses": 50,
                "winRate": if n % 2 == 0 { 72 } else { 48 },
                "averageScore": 3000,
                "gamesPlayed": 150 + n,
                "lastActive": "2024-05-01T10:00:00Z",
                "country": countries[(n as usize) % countries.len()],
                "level": n,
            })
        })
        .collect();
    serde_json::to_string(&players).unwrap()
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("leaderboard").chain(args.iter().copied())).unwrap()
}

fn run_to_string(cli: &Cli, players: &[Player], config: &LeaderboardConfig) -> String {
    console::set_colors_enabled(false);
    let mut out = Vec::new();
    run_with(cli, players, config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn loads_json_and_yaml_players() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("players.json");
    fs::write(&json_path, players_json(3)).unwrap();

    let from_json = load_players(&json_path).unwrap();
    assert_eq!(from_json.len(), 3);

    let yaml_path = dir.path().join("players.yaml");
    fs::write(&yaml_path, serde_yaml::to_string(&from_json).unwrap()).unwrap();
    assert_eq!(load_players(&yaml_path).unwrap(), from_json);
}

#[test]
fn loads_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leaderboard.yml");
    fs::write(
        &path,
        "page_sizes: [5, 10]\n\
         default_page_size: 5\n\
         default_sort_field: score\n\
         default_sort_dir: desc\n",
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.default_page_size, 5);
    assert_eq!(config.default_sort_field, "score");
    assert_eq!(config.default_sort_dir, Dir::Desc);
}

#[test]
fn json_output_carries_page_metadata() {
    let players: Vec<Player> = serde_json::from_str(&players_json(25)).unwrap();
    let out = run_to_string(
        &cli(&["--page-size", "10", "--page", "3", "--output", "json"]),
        &players,
        &LeaderboardConfig::default(),
    );

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["totalMatching"], 25);
    assert_eq!(value["totalPages"], 3);
    assert_eq!(value["pageIndex"], 3);
    assert_eq!(value["players"].as_array().unwrap().len(), 5);
    assert_eq!(value["players"][0]["id"], "player-21");
}

#[test]
fn text_output_lists_the_page() {
    let players: Vec<Player> = serde_json::from_str(&players_json(12)).unwrap();
    let out = run_to_string(
        &cli(&["--search", "kr", "--sort", "score", "--dir", "desc", "--page-size", "10"]),
        &players,
        &LeaderboardConfig::default(),
    );

    // KR is every fourth player starting at 1
    assert!(out.contains("Top Players Leaderboard  3 players"));
    assert!(out.contains("Score ↓"));
    assert!(out.contains("Showing 1-3 of 3"));
    let storm1 = out.find("Storm1 ").unwrap();
    let storm9 = out.find("Storm9").unwrap();
    assert!(storm1 < storm9);
    assert!(!out.contains("Storm2"));
    assert!(!out.contains("Next ›"));
}

#[test]
fn text_output_shows_pager() {
    let players: Vec<Player> = serde_json::from_str(&players_json(60)).unwrap();
    let out = run_to_string(
        &cli(&["--page-size", "10", "--page", "4"]),
        &players,
        &LeaderboardConfig::default(),
    );

    assert!(out.contains("Showing 31-40 of 60"));
    assert!(out.contains("‹ Prev 2 3 [4] 5 6 Next ›"));
}

#[test]
fn page_past_the_end_is_clamped() {
    let players: Vec<Player> = serde_json::from_str(&players_json(12)).unwrap();
    let out = run_to_string(
        &cli(&["--page-size", "10", "--page", "9", "--output", "json"]),
        &players,
        &LeaderboardConfig::default(),
    );

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["pageIndex"], 2);
    assert_eq!(value["players"].as_array().unwrap().len(), 2);
}

#[test]
fn query_errors_surface() {
    let players: Vec<Player> = serde_json::from_str(&players_json(3)).unwrap();
    let config = LeaderboardConfig::default();
    let mut out = Vec::new();

    let err = run_with(&cli(&["--sort", "elo"]), &players, &config, &mut out).unwrap_err();
    assert_eq!(
        err.downcast_ref::<QueryError>(),
        Some(&QueryError::UnknownField {
            field: "elo".to_string()
        })
    );

    let err = run_with(&cli(&["--page", "-1"]), &players, &config, &mut out).unwrap_err();
    assert_eq!(
        err.downcast_ref::<QueryError>(),
        Some(&QueryError::InvalidPageIndex { page_index: 0 })
    );

    let err = run_with(&cli(&["--page-size", "0"]), &players, &config, &mut out).unwrap_err();
    assert_eq!(
        err.downcast_ref::<QueryError>(),
        Some(&QueryError::InvalidPageSize { page_size: 0 })
    );
    assert!(out.is_empty());
}
