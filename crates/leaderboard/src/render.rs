//! Presentation of a query result: a styled text table, or structured data.

use chrono::{DateTime, Utc};
use console::{measure_text_width, pad_str, Alignment, Style};
use leaderboard_query::{page_window, Dir, QueryResult, QueryState};
use serde::Serialize;

use crate::player::Player;

/// Badge group for a player's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    /// Ranks 1-3.
    Podium,
    /// Ranks 4-10.
    TopTen,
    Field,
}

impl RankTier {
    pub fn of(rank: u32) -> Self {
        match rank {
            0..=3 => RankTier::Podium,
            4..=10 => RankTier::TopTen,
            _ => RankTier::Field,
        }
    }

    pub fn style(self) -> Style {
        match self {
            RankTier::Podium => Style::new().yellow().bold(),
            RankTier::TopTen => Style::new().white().bold(),
            RankTier::Field => Style::new().blue(),
        }
    }
}

/// Colour band for a win rate percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinRateTier {
    /// 70% and above.
    High,
    /// 50% up to 70%.
    Mid,
    Low,
}

impl WinRateTier {
    pub fn of(win_rate: f64) -> Self {
        if win_rate >= 70.0 {
            WinRateTier::High
        } else if win_rate >= 50.0 {
            WinRateTier::Mid
        } else {
            WinRateTier::Low
        }
    }

    pub fn style(self) -> Style {
        match self {
            WinRateTier::High => Style::new().green(),
            WinRateTier::Mid => Style::new().yellow(),
            WinRateTier::Low => Style::new().red(),
        }
    }
}

/// Coarse time since `last_active`: "Just now", "5h ago", "3d ago".
///
/// Timestamps in the future count as "Just now". Unparseable input yields
/// `"unknown"`.
pub fn format_last_active(last_active: &str, now: DateTime<Utc>) -> String {
    let Ok(then) = DateTime::parse_from_rfc3339(last_active) else {
        return "unknown".to_string();
    };
    let hours = now.signed_duration_since(then).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Formats an integer with comma thousands separators.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_win_rate(win_rate: f64) -> String {
    if win_rate.fract() == 0.0 {
        format!("{:.0}%", win_rate)
    } else {
        format!("{:.1}%", win_rate)
    }
}

struct Column {
    header: &'static str,
    field: &'static str,
    align: Alignment,
}

const COLUMNS: &[Column] = &[
    Column {
        header: "Rank",
        field: Player::RANK,
        align: Alignment::Right,
    },
    Column {
        header: "Player",
        field: Player::USERNAME,
        align: Alignment::Left,
    },
    Column {
        header: "Score",
        field: Player::SCORE,
        align: Alignment::Right,
    },
    Column {
        header: "Level",
        field: Player::LEVEL,
        align: Alignment::Right,
    },
    Column {
        header: "Win%",
        field: Player::WIN_RATE,
        align: Alignment::Right,
    },
    Column {
        header: "Games",
        field: Player::GAMES_PLAYED,
        align: Alignment::Right,
    },
    Column {
        header: "Avg Score",
        field: Player::AVERAGE_SCORE,
        align: Alignment::Right,
    },
    Column {
        header: "Country",
        field: Player::COUNTRY,
        align: Alignment::Left,
    },
    Column {
        header: "Last Active",
        field: Player::LAST_ACTIVE,
        align: Alignment::Left,
    },
];

fn cells(player: &Player, now: DateTime<Utc>) -> Vec<String> {
    vec![
        RankTier::of(player.rank)
            .style()
            .apply_to(player.rank)
            .to_string(),
        player.username.clone(),
        group_thousands(player.score),
        player.level.to_string(),
        WinRateTier::of(player.win_rate)
            .style()
            .apply_to(format_win_rate(player.win_rate))
            .to_string(),
        group_thousands(i64::from(player.games_played)),
        group_thousands(i64::from(player.average_score)),
        player.country.clone(),
        Style::new()
            .dim()
            .apply_to(format_last_active(&player.last_active, now))
            .to_string(),
    ]
}

fn header_cell(column: &Column, state: &QueryState) -> String {
    let label = if column.field == state.sort_field {
        let arrow = match state.sort_dir {
            Dir::Asc => '↑',
            Dir::Desc => '↓',
        };
        format!("{} {}", column.header, arrow)
    } else {
        column.header.to_string()
    };
    Style::new().bold().apply_to(label).to_string()
}

/// Renders the page as an aligned table with a title, a summary line, and a
/// pager when there is more than one page.
///
/// Styling follows `console`'s global colour setting, so the output is
/// plain text when colours are disabled.
pub fn render_table(
    result: &QueryResult<'_, Player>,
    state: &QueryState,
    pager_width: usize,
    now: DateTime<Utc>,
) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(result.len() + 1);
    rows.push(COLUMNS.iter().map(|c| header_cell(c, state)).collect());
    rows.extend(result.iter().map(|player| cells(player, now)));

    let widths: Vec<usize> = (0..COLUMNS.len())
        .map(|i| rows.iter().map(|row| measure_text_width(&row[i])).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}\n\n",
        Style::new().bold().cyan().apply_to("Top Players Leaderboard"),
        Style::new().dim().apply_to(format!("{} players", result.total_matching)),
    ));

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(COLUMNS)
            .zip(&widths)
            .map(|((cell, column), width)| pad_str(cell, *width, column.align, None).into_owned())
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out.push('\n');
    match result.range() {
        Some(range) => out.push_str(&format!(
            "Showing {}-{} of {}\n",
            range.start(),
            range.end(),
            result.total_matching
        )),
        None if result.total_matching == 0 => out.push_str("No players found\n"),
        None => out.push_str(&format!(
            "Page {} is past the last page ({})\n",
            result.page_index, result.total_pages
        )),
    }

    if result.total_pages > 1 {
        out.push_str(&render_pager(result, pager_width));
        out.push('\n');
    }
    out
}

/// Pager line: previous/next markers around a window of page numbers with
/// the current page bracketed.
pub fn render_pager<T>(result: &QueryResult<'_, T>, width: usize) -> String {
    let enabled = Style::new();
    let disabled = Style::new().dim();

    let mut parts = Vec::new();
    let prev = if result.has_previous() { &enabled } else { &disabled };
    parts.push(prev.apply_to("‹ Prev").to_string());

    for page in page_window(result.page_index, result.total_pages, width) {
        if page == result.page_index {
            parts.push(Style::new().bold().apply_to(format!("[{}]", page)).to_string());
        } else {
            parts.push(page.to_string());
        }
    }

    let next = if result.has_next() { &enabled } else { &disabled };
    parts.push(next.apply_to("Next ›").to_string());
    parts.join(" ")
}

/// Serializable view of one page, for JSON and YAML output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a> {
    pub players: &'a [&'a Player],
    pub total_matching: usize,
    pub total_pages: usize,
    pub page_index: usize,
    pub page_size: usize,
}

impl<'a> From<&'a QueryResult<'a, Player>> for PageView<'a> {
    fn from(result: &'a QueryResult<'a, Player>) -> Self {
        PageView {
            players: &result.records,
            total_matching: result.total_matching,
            total_pages: result.total_pages,
            page_index: result.page_index,
            page_size: result.page_size,
        }
    }
}
