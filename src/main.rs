use chrono::Local;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use mtg_combat_sim::card::{Card, CardDatabase};
use mtg_combat_sim::matchup::analyze::{aggregate_results, analyze_batch};
use mtg_combat_sim::matchup::{
    generate_matchup_detailed, BalanceReport, Board, Matchup, MatchupConfig,
};
use mtg_combat_sim::rng::GameRng;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Parser)]
#[command(name = "mtg-combat-sim")]
#[command(about = "Random balanced combat puzzles for Magic: The Gathering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Card collection (JSON array of card records)
    #[arg(short, long, default_value = "cards.json", global = true)]
    cards: String,

    /// Matchup config file (JSON); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<String>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Trace color picks, sampling and balancing
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single matchup (default)
    Generate {
        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Trace color picks, sampling and balancing
        #[arg(short, long)]
        verbose: bool,

        /// Print the matchup as JSON instead of text
        #[arg(long)]
        json: bool,

        /// List the art URL of every card on the table
        #[arg(long)]
        art: bool,

        /// Save the matchup to a timestamped JSON file
        #[arg(long)]
        save: bool,
    },

    /// Generate many matchups and report how often balancing kicked in
    Analyze {
        /// Number of matchups to generate
        #[arg(short, long, default_value = "10000")]
        num_matchups: usize,

        /// Base seed; matchup i uses seed + i
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the aggregate report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Matchup file written by `generate --save`
#[derive(Serialize)]
struct SavedMatchup<'a> {
    generated_at: String,
    seed: u64,
    config: &'a MatchupConfig,
    matchup: &'a Matchup,
    report: &'a BalanceReport,
    art_urls: BTreeMap<String, String>,
}

/// Matchup printed by `generate --json`
#[derive(Serialize)]
struct MatchupOutput<'a> {
    #[serde(flatten)]
    matchup: &'a Matchup,
    art_urls: BTreeMap<String, String>,
}

fn main() {
    let cli = Cli::parse();

    // Load the card collection
    let db = match CardDatabase::from_file(&cli.cards) {
        Ok(db) => {
            eprintln!("✓ Loaded {} cards from {}", db.card_count(), cli.cards);
            if db.skipped_count() > 0 {
                eprintln!("  Skipped {} malformed records", db.skipped_count());
            }
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load cards: {}", e);
            std::process::exit(1);
        }
    };

    let config = match &cli.config {
        Some(path) => match MatchupConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("✗ Failed to load config '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => MatchupConfig::default(),
    };

    match cli.command {
        Some(Commands::Generate {
            seed,
            verbose,
            json,
            art,
            save,
        }) => {
            let verbose = verbose || cli.verbose;
            run_generate(&db, &config, seed.or(cli.seed), verbose, json, art, save);
        }
        Some(Commands::Analyze {
            num_matchups,
            seed,
            json,
        }) => {
            run_analyze(&db, &config, num_matchups, seed.or(cli.seed), json);
        }
        None => {
            run_generate(&db, &config, cli.seed, cli.verbose, false, false, false);
        }
    }
}

fn run_generate(
    db: &CardDatabase,
    config: &MatchupConfig,
    seed: Option<u64>,
    verbose: bool,
    json: bool,
    art: bool,
    save: bool,
) {
    let mut rng = GameRng::new(seed);
    let seed = rng.seed();
    let generated = generate_matchup_detailed(db.cards(), config, &mut rng, verbose && !json);

    if json {
        let output = MatchupOutput {
            matchup: &generated.matchup,
            art_urls: generated.matchup.art_urls(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("✗ Failed to serialize matchup: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("\n=== MTG Combat Sim ===\n");
        println!("Seed: {}", seed);
        print_board("Opponent", &generated.matchup.board1, false);
        print_board("You", &generated.matchup.board2, true);

        if let Some(raise) = generated.report.life_raise {
            println!(
                "\nBalanced: alpha strike of {} would have been lethal, life {} -> {}",
                raise.alpha.unsigned_abs(),
                raise.from,
                raise.to
            );
        }
        if let Some(padding) = generated.report.land_padding {
            println!("Balanced: added {} land(s) to the smaller side", padding.added);
        }

        if art {
            println!("\nArt:");
            for (name, url) in generated.matchup.art_urls() {
                println!("  {}: {}", name, url);
            }
        }
    }

    if save {
        let saved = SavedMatchup {
            generated_at: Local::now().to_rfc3339(),
            seed,
            config,
            matchup: &generated.matchup,
            report: &generated.report,
            art_urls: generated.matchup.art_urls(),
        };
        match save_matchup(&saved) {
            Ok(filename) => eprintln!("✓ Matchup saved to: {}", filename),
            Err(e) => eprintln!("✗ Failed to save matchup: {}", e),
        }
    }
}

fn save_matchup(saved: &SavedMatchup) -> std::io::Result<String> {
    let filename = format!("matchup_{}.json", Local::now().format("%Y%m%d_%H%M%S"));
    let content = serde_json::to_string_pretty(saved)?;
    std::fs::write(&filename, content)?;
    Ok(filename)
}

/// "Forest, Forest, Swamp" -> "2 Forest, 1 Swamp"
fn group_lands(lands: &[Card]) -> String {
    let mut groups: Vec<(&str, usize)> = Vec::new();
    for land in lands {
        match groups.last_mut() {
            Some((name, count)) if *name == land.name => *count += 1,
            _ => groups.push((land.name.as_str(), 1)),
        }
    }
    groups
        .iter()
        .map(|(name, count)| format!("{} {}", count, name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_board(label: &str, board: &Board, show_hand: bool) {
    let colors: String = board.colors.iter().map(|c| c.to_char()).collect();
    println!("\n--- {} ({}) ---", label, colors);
    println!("Life: {}", board.life);

    let creatures: Vec<String> = board
        .creatures
        .iter()
        .map(|c| format!("{} [{}]", c.name, c.power.as_deref().unwrap_or("-")))
        .collect();
    println!(
        "Creatures: {}",
        if creatures.is_empty() { "(none)".to_string() } else { creatures.join(", ") }
    );
    println!("Lands: {}", group_lands(&board.lands));

    if show_hand {
        let hand: Vec<&str> = board.hand.iter().map(|c| c.name.as_str()).collect();
        println!(
            "Hand: {}",
            if hand.is_empty() { "(empty)".to_string() } else { hand.join(", ") }
        );
    } else {
        println!("Hand: {} card(s)", board.hand.len());
    }
}

fn run_analyze(
    db: &CardDatabase,
    config: &MatchupConfig,
    num_matchups: usize,
    seed: Option<u64>,
    json: bool,
) {
    let base_seed = GameRng::new(seed).seed();

    if !json {
        println!("\n=== Matchup Balance Analysis ===\n");
        println!("Matchups: {}", num_matchups);
        println!("Base seed: {}", base_seed);
        println!();
    }

    let progress = if json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(num_matchups as u64)
    };
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} ({eta})") {
        progress.set_style(style);
    }

    let start = std::time::Instant::now();
    let generated = analyze_batch(db.cards(), config, num_matchups, base_seed, &progress);
    progress.finish_and_clear();
    let elapsed = start.elapsed();

    let results = aggregate_results(&generated);

    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("✗ Failed to serialize results: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let pct = |n: usize| n as f64 / num_matchups.max(1) as f64 * 100.0;

    println!("=== Results ===\n");
    println!(
        "Life raised:   {:5.1}% ({}; side 1: {}, side 2: {})",
        pct(results.life_raised),
        results.life_raised,
        results.life_raised_side_one,
        results.life_raised_side_two
    );
    println!("  Avg life added: {:.2}", results.avg_life_added);
    println!("Lands padded:  {:5.1}% ({})", pct(results.lands_padded), results.lands_padded);
    println!("  Avg lands added: {:.2}", results.avg_lands_added);
    println!();
    println!("Per side:");
    println!("  Avg life:      {:.2}", results.avg_life);
    println!("  Avg lands:     {:.2}", results.avg_lands);
    println!("  Avg creatures: {:.2}", results.avg_creatures);
    println!("  Avg hand:      {:.2}", results.avg_hand);
    println!("Avg |alpha| before balancing: {:.2}", results.avg_abs_alpha);

    println!("\nColor picks:");
    let total_picks: usize = results.color_counts.values().sum();
    for (color, count) in &results.color_counts {
        let share = *count as f64 / total_picks.max(1) as f64 * 100.0;
        let bar = "█".repeat((share / 2.0) as usize);
        println!("  {:?}: {:5.1}% {} ({})", color, share, bar, count);
    }

    println!(
        "\nCompleted in {:.2?} ({:.0} matchups/sec)",
        elapsed,
        num_matchups as f64 / elapsed.as_secs_f64()
    );
}
