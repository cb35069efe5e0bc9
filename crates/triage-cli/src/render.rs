//! Text rendering for the three-part analysis response.

use triage_core::{HistoryEntry, Outcome, Source, TriageResponse};

pub fn print_response(response: &TriageResponse) {
    match &response.outcome {
        Outcome::Analyzed(summary) => {
            println!("📊 Latest Analysis");
            println!("  Source:    {}", summary.source);
            println!(
                "  Sentiment: {} {} ({})",
                summary.tone.emoji(),
                summary.sentiment_label,
                summary.tone.color()
            );
            println!("  Urgency:   {}/10", summary.sentiment_score);
        }
        Outcome::Bypassed { reason } => {
            println!("⚠️  Analysis Bypassed");
            println!("  {reason}");
            println!("  The workflow followed its 'False' branch.");
        }
        Outcome::Failed { error } => {
            println!("❌ Error: {error}");
        }
    }

    println!();
    println!("📝 Drafted Response");
    println!("  {}", response.reply);
    println!();
    print_history(&response.history);
}

pub fn print_history(entries: &[HistoryEntry]) {
    println!("🗄️  Processing History");
    if entries.is_empty() {
        println!("  (no tickets processed yet)");
        return;
    }

    println!(
        "  {:<17} {:<15} {:<10} {:<6} {}",
        "Timestamp", "Source", "Sentiment", "Score", "Reply"
    );
    for entry in entries {
        println!(
            "  {:<17} {:<15} {:<10} {:<6} {}",
            entry.timestamp, entry.source, entry.sentiment, entry.score, entry.reply
        );
    }
}

pub fn print_examples(examples: &[(Source, &str)]) {
    println!("Quick test examples:");
    for (source, message) in examples {
        println!("  triage-cli analyze --source {} {message:?}", cli_name(*source));
    }
}

/// The clap value-enum spelling for a source, for copy-pasteable commands.
fn cli_name(source: Source) -> &'static str {
    match source {
        Source::Twitter => "twitter",
        Source::Email => "email",
        Source::GoogleReviews => "google-reviews",
    }
}
