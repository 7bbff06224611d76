//! Output formatting for the CLI

use crate::{brain::BrainStats, pipeline::TrainingResult};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a count with its share of `total`
pub fn format_share(count: usize, total: usize) -> String {
    if total == 0 {
        return count.to_string();
    }
    format!("{count} ({:.1}%)", 100.0 * count as f64 / total as f64)
}

/// Print outcome counts. `first` and `second` label the two seats.
pub fn print_results(result: &TrainingResult, first: &str, second: &str) {
    print_kv("Games", &result.total_games.to_string());
    print_kv(
        &format!("{first} wins"),
        &format_share(result.wins, result.total_games),
    );
    print_kv(
        &format!("{second} wins"),
        &format_share(result.losses, result.total_games),
    );
    print_kv("Draws", &format_share(result.draws, result.total_games));
}

pub fn print_brain_stats(stats: &BrainStats, recounts: u32) {
    print_kv("States", &stats.states.to_string());
    print_kv("Total beads", &stats.total_beads.to_string());
    print_kv("Empty states", &stats.collapsed_states.to_string());
    print_kv("Recounts", &recounts.to_string());
}
