use std::io::Read;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cosmic_rs::{
    ALL_KOOTAS, ApiError, CompatibilityRequest, CompatibilityScore, CosmicConfig,
    DetailedCompatibilityScore, Endpoint, KundliMatchingScore, MAX_GUNA, MatchService,
    PairRequest, ServiceConfig, SignRequest, ZodiacSign, format_birth_date, init_tracing,
    parse_birth_date, quick_label, zodiac_info,
};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "cosmic", about = "Cosmic Connections zodiac compatibility CLI")]
struct Cli {
    /// Seed for score offsets; overrides COSMIC_SEED
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sun sign for a birth date
    Sign {
        /// Birth date (YYYY-MM-DD)
        date: String,
    },
    /// Reference record for a sign
    Info {
        /// Sign name, case-insensitive
        sign: String,
    },
    /// Validate a birth date and print the age
    Validate {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Day to compute the age on (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,
    },
    /// Quick compatibility between two signs
    Compat {
        sign1: String,
        sign2: String,
    },
    /// Detailed compatibility with narratives
    Detailed {
        sign1: String,
        sign2: String,
        /// First person's birth time (HH:MM)
        #[arg(long)]
        time1: Option<String>,
        /// Second person's birth time (HH:MM)
        #[arg(long)]
        time2: Option<String>,
    },
    /// Ashtakoot (Kundli) matching
    Kundli {
        sign1: String,
        sign2: String,
        /// First person's birth time (HH:MM)
        #[arg(long)]
        time1: String,
        /// Second person's birth time (HH:MM)
        #[arg(long)]
        time2: String,
    },
    /// Partner signs ranked by base compatibility
    Rank {
        sign: String,
    },
    /// Send a JSON body from stdin to a request endpoint
    Request {
        /// compatibility, sign, detailed, kundli or profile-match
        endpoint: String,
    },
}

#[derive(Serialize)]
struct RankEntry {
    sign: ZodiacSign,
    score: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AgeReport<'a> {
    birth_date: &'a str,
    age: u32,
}

#[derive(Serialize)]
struct RequestReport {
    status: u16,
    body: serde_json::Value,
}

fn main() {
    let cli = Cli::parse();

    let config = CosmicConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    });
    init_tracing(&config.log_level);

    let mut service_config = ServiceConfig::from(&config);
    if cli.seed.is_some() {
        service_config.seed = cli.seed;
    }
    if let Commands::Validate {
        today: Some(today), ..
    } = &cli.command
    {
        service_config.reference_date = Some(require_date(today));
    }
    let service = MatchService::new(service_config);
    debug!(command = ?cli.command, seed = ?service.config().seed, "running command");

    let json = cli.json;
    match cli.command {
        Commands::Sign { date } => {
            let resp = or_exit(service.sign(&SignRequest {
                birth_date: Some(date.clone()),
            }));
            if json {
                print_json(&resp);
            } else {
                println!(
                    "{}: {} {} ({})",
                    display_date(&date),
                    resp.sign,
                    resp.info.symbol,
                    resp.info.date_range
                );
            }
        }

        Commands::Info { sign } => {
            let info = zodiac_info(require_sign(&sign));
            if json {
                print_json(info);
            } else {
                println!("{} {}  {}", info.sign, info.symbol, info.date_range);
                println!("  Element:       {}", info.element);
                println!("  Quality:       {}", info.quality);
                println!("  Ruling planet: {}", info.ruling_planet);
                println!("  Color:         {}", info.color);
                println!("  Traits:        {}", info.traits.join(", "));
                let matches: Vec<&str> = info.compatibility.iter().map(|s| s.name()).collect();
                println!("  Best matches:  {}", matches.join(", "));
            }
        }

        Commands::Validate { date, .. } => {
            let age = or_exit(service.validate(&date));
            if json {
                print_json(&AgeReport {
                    birth_date: &date,
                    age,
                });
            } else {
                println!("{}: valid, age {age}", display_date(&date));
            }
        }

        Commands::Compat { sign1, sign2 } => {
            let score = or_exit(service.compatibility(&CompatibilityRequest {
                user_sign: Some(sign1.clone()),
                partner_sign: Some(sign2.clone()),
            }));
            if json {
                print_json(&score);
            } else {
                println!(
                    "{sign1} + {sign2}: {:.0}% ({})",
                    score.overall,
                    quick_label(score.overall)
                );
                print_score(&score);
            }
        }

        Commands::Detailed {
            sign1,
            sign2,
            time1,
            time2,
        } => {
            let detailed = or_exit(service.detailed(&PairRequest {
                user_sign: Some(sign1.clone()),
                partner_sign: Some(sign2.clone()),
                user_birth_time: time1,
                partner_birth_time: time2,
            }));
            if json {
                print_json(&detailed);
            } else {
                print_detailed(&sign1, &sign2, &detailed);
            }
        }

        Commands::Kundli {
            sign1,
            sign2,
            time1,
            time2,
        } => {
            let kundli = or_exit(service.kundli(&PairRequest {
                user_sign: Some(sign1.clone()),
                partner_sign: Some(sign2.clone()),
                user_birth_time: Some(time1),
                partner_birth_time: Some(time2),
            }));
            if json {
                print_json(&kundli);
            } else {
                print_kundli(&sign1, &sign2, &kundli);
            }
        }

        Commands::Rank { sign } => {
            let ranking = or_exit(service.rank(&sign));
            if json {
                let entries: Vec<RankEntry> = ranking
                    .into_iter()
                    .map(|(sign, score)| RankEntry { sign, score })
                    .collect();
                print_json(&entries);
            } else {
                for (i, (partner, score)) in ranking.iter().enumerate() {
                    println!("{:>2}. {:<12} {score:>3}", i + 1, partner.name());
                }
            }
        }

        Commands::Request { endpoint } => {
            let endpoint: Endpoint = endpoint.parse().unwrap_or_else(|e: String| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let mut body = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut body) {
                eprintln!("Failed to read request body: {e}");
                std::process::exit(1);
            }
            let (status, response) = service.handle_request(endpoint, &body);
            let body = serde_json::from_str(&response)
                .unwrap_or(serde_json::Value::String(response));
            print_json(&RequestReport { status, body });
        }
    }
}

// ---------------------------------------------------------------------------
// Argument helpers
// ---------------------------------------------------------------------------

fn require_sign(name: &str) -> ZodiacSign {
    name.parse().unwrap_or_else(|_| {
        eprintln!("Invalid zodiac sign: {name}");
        eprintln!("Valid: Aries, Taurus, Gemini, Cancer, Leo, Virgo, Libra, Scorpio, Sagittarius, Capricorn, Aquarius, Pisces");
        std::process::exit(1);
    })
}

fn require_date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").unwrap_or_else(|e| {
        eprintln!("Invalid date {text:?}: {e}");
        std::process::exit(1);
    })
}

/// Long form of an already-validated date, or the input as given.
fn display_date(text: &str) -> String {
    parse_birth_date(text)
        .map(format_birth_date)
        .unwrap_or_else(|_| text.to_string())
}

fn or_exit<T>(result: Result<T, ApiError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to encode output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

fn print_score(score: &CompatibilityScore) {
    let aspects = [
        ("Sun", score.sun_sign),
        ("Moon", score.moon_sign),
        ("Rising", score.rising_sign),
        ("Venus", score.venus_sign),
        ("Mars", score.mars_sign),
        ("Communication", score.communication),
        ("Emotional", score.emotional),
        ("Physical", score.physical),
        ("Spiritual", score.spiritual),
    ];
    for (name, value) in aspects {
        println!("  {name:<14} {value:>5.1}");
    }
    print_list("Strengths", &score.strengths);
    print_list("Challenges", &score.challenges);
    print_list("Advice", &score.advice);
}

fn print_detailed(sign1: &str, sign2: &str, detailed: &DetailedCompatibilityScore) {
    let score = &detailed.score;
    println!(
        "{sign1} + {sign2}: {:.0}% ({})",
        score.overall,
        score.band().label()
    );
    println!(
        "  Element {:.0}  Quality {:.0}  Planetary {:.0}",
        detailed.element_compatibility,
        detailed.quality_compatibility,
        detailed.planetary_compatibility
    );
    print_score(score);
    let analysis = &detailed.detailed_analysis;
    println!("Love:       {}", analysis.love);
    println!("Friendship: {}", analysis.friendship);
    println!("Marriage:   {}", analysis.marriage);
    println!("Business:   {}", analysis.business);
    print_list("Recommendations", &detailed.recommendations);
}

fn print_kundli(sign1: &str, sign2: &str, kundli: &KundliMatchingScore) {
    println!(
        "{sign1} + {sign2}: {} / {MAX_GUNA} guna ({})",
        kundli.guna,
        kundli.compatibility.name()
    );
    for koota in ALL_KOOTAS {
        println!(
            "  {:<7} {:>4} / {}",
            koota.name(),
            kundli.detailed_scores.get(koota),
            koota.max_points()
        );
    }
    println!(
        "Mangal dosha: {}",
        if kundli.mangal_dosha { "yes" } else { "no" }
    );
    print_list("Recommendations", &kundli.recommendations);
}
