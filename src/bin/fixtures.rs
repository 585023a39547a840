use clap::Parser;
use lovefi_match::core::Matcher;
use lovefi_match::fixtures::{fixtures, run_fixtures, FixtureOutcome};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lovefi-fixtures",
    version,
    about = "Score the reference profile pairs and compare them to their expected buckets"
)]
struct Cli {
    /// Score every fixture (the default)
    #[arg(long)]
    test: bool,

    /// List the fixture profiles without scoring them
    #[arg(long, conflicts_with = "test")]
    profiles: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), serde_json::Error> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let run_tests = cli.test || !cli.profiles;
    if !run_tests {
        print_profiles();
        return Ok(());
    }

    let outcomes = run_fixtures(&Matcher::with_default_weights());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print_outcomes(&outcomes);
        print_summary(&outcomes);
    }

    Ok(())
}

fn rule() -> String {
    "=".repeat(60)
}

fn print_profiles() {
    let all = fixtures();

    println!("Fixture profiles");
    println!("{}", rule());

    for (i, fixture) in all.iter().enumerate() {
        println!("\nTest {}: {}", i + 1, fixture.name);
        for person in [&fixture.person1, &fixture.person2] {
            println!(
                "  {}, Age {}, Interests: [{}], Location: {}",
                person.name,
                person.age,
                person.interests.join(", "),
                person.location
            );
        }
        println!("  Expected: {}", fixture.expected.label);
    }

    println!("\n{}", rule());
    println!("Total fixtures: {}", all.len());
}

fn print_outcomes(outcomes: &[FixtureOutcome]) {
    println!("Running {} fixtures...\n", outcomes.len());

    for (i, outcome) in outcomes.iter().enumerate() {
        println!("Test {}: {}", i + 1, outcome.name);
        println!("{}", "-".repeat(40));
        println!("Match Score: {:.1}/100", outcome.score);
        println!("Details: {}", outcome.details);
        println!("Expected: {}", outcome.expected);
        println!("{}\n", if outcome.passed { "PASS" } else { "REVIEW - score outside expected range" });
    }
}

fn print_summary(outcomes: &[FixtureOutcome]) {
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let total = outcomes.len();
    let rate = if total == 0 { 0.0 } else { passed as f64 / total as f64 * 100.0 };

    println!("{}", rule());
    println!("Results: {}/{} fixtures in range", passed, total);
    println!("Success Rate: {:.1}%", rate);
    println!("{}", rule());
}
