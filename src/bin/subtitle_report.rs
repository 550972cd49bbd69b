use std::env;
use subword::analysis::{ordinal, FrequencyTable, TimeSeries};
use subword::config::DEFAULT_WINDOW_MINUTES;
use subword::subtitles::format_timestamp;
use subword::{open, phrase_frequency, phrase_rank, word_count_series, word_variety_series};

const TOP_WORDS: usize = 10;

fn main() {
    env_logger::init();

    println!("🎬 Subtitle Report - Word Timeline Analysis");
    println!("===========================================");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: subtitle_report <file.srt> [phrase] [window_minutes]");
        println!("Example: subtitle_report tests/testdata/sample.srt \"get out\" 1");
        return;
    }
    let file_path = &args[1];
    let phrase = args.get(2).map(String::as_str);
    let window = match args.get(3).map(|w| w.parse::<f64>()) {
        Some(Ok(w)) => w,
        Some(Err(_)) => {
            println!("❌ Invalid window '{}', expected minutes", args[3]);
            return;
        }
        None => DEFAULT_WINDOW_MINUTES,
    };

    match report(file_path, phrase, window) {
        Ok(_) => println!("\n✅ Report completed successfully"),
        Err(e) => println!("\n❌ Report failed: {}", e),
    }
}

fn report(path: &str, phrase: Option<&str>, window: f64) -> Result<(), Box<dyn std::error::Error>> {
    let document = open(path)?;
    let tokens = &document.tokens;
    let table = FrequencyTable::build(tokens);

    println!("📄 File: {}", path);
    println!("💬 Cues: {} ({} skipped)", document.cues.len(), document.skipped.len());
    for skipped in &document.skipped {
        println!("  ⚠️  line {}: {}", skipped.line, skipped.reason);
    }
    if let Some(last) = document.cues.last() {
        println!("⏱️  Last cue ends at {}", format_timestamp(last.end_seconds()));
    }
    println!("🔤 Words: {} ({} distinct)", table.total(), table.distinct());
    println!();

    println!("🏆 Most common words:");
    for (idx, entry) in table.entries().iter().take(TOP_WORDS).enumerate() {
        println!("  {:>5}  {:<20} {}", ordinal(idx + 1), entry.word, entry.count);
    }

    print_series("📈 Total words", &word_count_series(tokens, window), window);
    print_series("🌱 Unique words", &word_variety_series(tokens, window), window);

    if let Some(phrase) = phrase {
        let series = phrase_frequency(tokens, phrase, window);
        print_series(&format!("🔍 \"{}\"", phrase), &series, window);
        println!(
            "  \"{}\" occurs {} times and is the {} most common word",
            phrase,
            series.total(),
            phrase_rank(tokens, phrase)
        );
    }

    Ok(())
}

fn print_series(title: &str, series: &TimeSeries, window: f64) {
    println!();
    println!("{} (windows of {} min):", title, window);
    for (minute, count) in series.points() {
        println!("  {:>8.2} min  {}", minute, count);
    }
}
