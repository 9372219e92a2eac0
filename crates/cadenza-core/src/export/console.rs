//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::chart::Tier;
use crate::rating::RatingAggregate;
use crate::score::{ClearStatus, ScoreRecord};

/// Format a rating aggregate for console display with colored output
///
/// Returns a multi-line string: a boxed header with the overall rating,
/// then one ranked line per best-list record.
pub fn format_aggregate_console(player_name: &str, aggregate: &RatingAggregate) -> String {
    let mut output = String::new();

    let header = format!(
        "  {} · rating {:.2} · best {}",
        player_name.bold(),
        aggregate.overall,
        aggregate.best.len()
    );

    let content_width = (player_name.len() + 32).max(56);
    let border: String = "━".repeat(content_width);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", header);
    let _ = writeln!(output, "{}", border_dim);

    for (rank, record) in aggregate.best.iter().enumerate() {
        let _ = writeln!(output, "{}", format_record_line(rank + 1, record));
    }

    let _ = write!(output, "{}", border_dim);
    output
}

fn format_record_line(rank: usize, record: &ScoreRecord) -> String {
    let favorite = if record.favorite { " ★" } else { "" };

    // Accuracy for the binary-save game, score headroom for the other
    let detail = match record.accuracy {
        Some(accuracy) => format!("{:>6.2}%", f64::from(accuracy) * 100.0),
        None => match record.next_point_score {
            Some(gain) if gain > 0.0 => format!("+{gain:.0}"),
            _ => "capped".to_string(),
        },
    };

    format!(
        "  {:>2}. {} [{} {:.1}] {:>7} {:>8} {} {:.3}{}",
        rank,
        record.title.bold(),
        format_colored_tier(record.tier),
        record.difficulty,
        record.score,
        detail,
        format_colored_status(record.status),
        record.effective_rating,
        favorite,
    )
}

/// Format tier with color
fn format_colored_tier(tier: Tier) -> String {
    let name = tier.short_name();
    match tier {
        Tier::Ez | Tier::I => name.green().to_string(),
        Tier::Hd => name.blue().to_string(),
        Tier::Ii => name.cyan().to_string(),
        Tier::Iii => name.yellow().to_string(),
        Tier::In | Tier::Iv => name.red().to_string(),
        Tier::IvAlpha => name.purple().to_string(),
        Tier::At | Tier::Legacy => name.dimmed().to_string(),
    }
}

/// Format clear status with color
fn format_colored_status(status: ClearStatus) -> String {
    let name = status.short_name();
    match status {
        ClearStatus::None => name.dimmed().to_string(),
        ClearStatus::FullCombo => name.cyan().to_string(),
        ClearStatus::AllPerfect => name.truecolor(255, 200, 0).bold().to_string(),
    }
}

/// Simple record summary for logging
pub fn format_record_summary(record: &ScoreRecord) -> String {
    format!(
        "{} {} {} {} ({:.3})",
        record.title,
        record.tier.short_name(),
        record.score,
        record.status.short_name(),
        record.effective_rating
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::{BestSelection, aggregate};

    fn record(title: &str, tier: Tier, score: u32, rating: f64) -> ScoreRecord {
        ScoreRecord {
            song_id: title.to_lowercase(),
            title: title.to_string(),
            tier,
            difficulty: 13.5,
            score,
            accuracy: None,
            cleared: true,
            status: ClearStatus::FullCombo,
            favorite: false,
            rating,
            effective_rating: rating,
            next_point_score: Some(200.0),
        }
    }

    #[test]
    fn test_format_aggregate_console() {
        let records = vec![
            record("Dream Goes On", Tier::Iv, 1_004_231, 16.2),
            record("Inverted World", Tier::IvAlpha, 998_102, 15.1),
        ];
        let result = aggregate(records, BestSelection::BEST40);

        let rendered = format_aggregate_console("player-one", &result);

        assert!(rendered.contains("player-one"));
        assert!(rendered.contains("Dream Goes On"));
        assert!(rendered.contains("1004231"));
        assert!(rendered.contains("+200"));
        // Ranked in rating order
        let first = rendered.find("Dream Goes On").unwrap();
        let second = rendered.find("Inverted World").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_format_record_summary() {
        let summary = format_record_summary(&record("Test Song", Tier::Iii, 987_654, 11.25));
        assert!(summary.contains("Test Song"));
        assert!(summary.contains("III"));
        assert!(summary.contains("987654"));
        assert!(summary.contains("FC"));
        assert!(summary.contains("11.250"));
    }
}
