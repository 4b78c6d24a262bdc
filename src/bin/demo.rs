//! u-basics demo - smoke test for every public operation
//!
//! Prints the result of each numeric, text and random helper. Output is
//! for humans; its format is not stable.
//!
//! ```text
//! u-basics-demo [--seed <SEED>] [--verbose]
//! ```

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use u_basics::constants::{E, LN_10, LN_2, PHI, PI, SQRT_2, TAU};
use u_basics::numeric::{self, RootFinderConfig};
use u_basics::random;
use u_basics::text::{self, Case, LOREM_IPSUM};
use u_basics::Result;

/// Exercise the u-basics helpers
#[derive(Parser)]
#[command(name = "u-basics-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed the shared random source for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    if let Some(seed) = cli.seed {
        random::init_global(seed)?;
        info!(seed, "Shared random source seeded");
    }

    constants();
    arithmetic()?;
    conversions();
    strings();
    randomness(cli.verbose);
    Ok(())
}

fn constants() {
    println!("== constants");
    println!("PI = {PI}, TAU = {TAU}, E = {E}, PHI = {PHI}");
    println!("SQRT_2 = {SQRT_2}, LN_2 = {LN_2}, LN_10 = {LN_10}");
}

fn arithmetic() -> Result<()> {
    println!("== arithmetic");
    println!("sum(3, 4) = {}", numeric::sum(3.0, 4.0));
    println!("subtract(3, 4) = {}", numeric::subtract(3.0, 4.0));
    println!("multiply(3, 4) = {}", numeric::multiply(3.0, 4.0));
    println!("divide(3, 4) = {}", numeric::divide(3.0, 4.0));
    println!("divide(3, 0) = {}", numeric::divide(3.0, 0.0));
    println!("checked_divide(3, 0) = {:?}", numeric::checked_divide(3.0, 0.0));
    println!("power(2, 8) = {}", numeric::power(2.0, 8.0));
    println!("square_root(2) = {}", numeric::square_root(2.0));
    println!("nth_root(2, 27) = {}", numeric::nth_root(2.0, 27.0));
    println!("nth_root(3, 27) = {}", numeric::nth_root(3.0, 27.0));
    println!("nth_root(2, -16) = {}", numeric::nth_root(2.0, -16.0));
    println!("try_nth_root(2, -16) = {:?}", numeric::try_nth_root(2.0, -16.0));

    let precise = RootFinderConfig {
        tolerance: 1e-12,
        ..Default::default()
    };
    let root = numeric::try_nth_root_with(&precise, 5.0, 3125.0)?;
    println!("try_nth_root_with(tol 1e-12, 5, 3125) = {root}");

    println!("logarithm(2, 1024) = {}", numeric::logarithm(2.0, 1024.0));
    println!("checked_logarithm(1, 5) = {:?}", numeric::checked_logarithm(1.0, 5.0));
    let rad = numeric::degrees_to_radians(30.0);
    println!("degrees_to_radians(30) = {rad}");
    println!("radians_to_degrees({rad}) = {}", numeric::radians_to_degrees(rad));
    println!(
        "sine / cosine / tangent(30°) = {} / {} / {}",
        numeric::sine(rad),
        numeric::cosine(rad),
        numeric::tangent(rad)
    );
    println!("absolute_value(-7.5) = {}", numeric::absolute_value(-7.5));
    println!("is_even(4) = {}", numeric::is_even(4.0));
    println!("is_even(4.6) = {}", numeric::is_even(4.6));
    println!("is_palindrome_int(12321) = {}", numeric::is_palindrome_int(12321));
    println!("is_palindrome_int(-121) = {}", numeric::is_palindrome_int(-121));
    Ok(())
}

fn conversions() {
    println!("== conversions");
    println!("feet_to_meters(10) = {}", numeric::feet_to_meters(10.0));
    println!("meters_to_feet(10) = {}", numeric::meters_to_feet(10.0));
    println!("celsius_to_fahrenheit(100) = {}", numeric::celsius_to_fahrenheit(100.0));
    println!("fahrenheit_to_celsius(212) = {}", numeric::fahrenheit_to_celsius(212.0));
    println!("celsius_to_kelvin(0) = {}", numeric::celsius_to_kelvin(0.0));
    println!("kelvin_to_celsius(0) = {}", numeric::kelvin_to_celsius(0.0));
    println!("fahrenheit_to_kelvin(32) = {}", numeric::fahrenheit_to_kelvin(32.0));
    println!("kelvin_to_fahrenheit(0) = {}", numeric::kelvin_to_fahrenheit(0.0));
}

fn strings() {
    println!("== strings");
    let sentence = "I love programming in C++";
    println!("to_upper = {}", text::to_upper(sentence));
    println!("to_lower = {}", text::to_lower(sentence));

    let mut greeting = text::join(["Hello", ", ", "world", "!"]);
    let mut scratch = String::from("scratch");
    println!("join = {greeting}");
    text::clear([&mut greeting, &mut scratch]);
    println!("clear -> {:?}, {:?}", greeting, scratch);

    println!(
        "search_first_substring(programming) = {}",
        text::search_first_substring(sentence, "programming", Case::Sensitive)
    );
    println!(
        "search_first_substring(PROGRAMMING, insensitive) = {}",
        text::search_first_substring(sentence, "PROGRAMMING", Case::Insensitive)
    );
    let range = text::search_substring_range(sentence, "programming", Case::Sensitive);
    println!("search_substring_range(programming) = ({}, {})", range.start, range.end);
    let missing = text::search_substring_range(sentence, "Rust", Case::Sensitive);
    println!("search_substring_range(Rust) = ({}, {})", missing.start, missing.end);

    println!("is_palindrome(hellolleh) = {}", text::is_palindrome("hellolleh"));
    println!("is_palindrome(hello) = {}", text::is_palindrome("hello"));
    println!(
        "is_anagram(anagram, nagaram) = {}",
        text::is_anagram("anagram", "nagaram", Case::Sensitive)
    );
    println!(
        "is_anagram(Listen, Silent, insensitive) = {}",
        text::is_anagram("Listen", "Silent", Case::Insensitive)
    );
    println!("lorem = {}", &LOREM_IPSUM[..26]);
}

fn randomness(verbose: bool) {
    println!("== random");
    println!("rand_float(-1, 1) = {}", random::rand_float(-1.0, 1.0));
    println!("rand_int(0, 100) = {}", random::rand_int(0, 100));
    println!("random_bool() = {}", random::random_bool());
    println!("random_unit() = {}", random::random_unit());
    println!("random_percent() = {}", random::random_percent());
    println!("roll_die() = {}", random::roll_die());

    if verbose {
        let rolls: Vec<i32> = (0..10).map(|_| random::roll_die()).collect();
        info!(?rolls, "ten more dice");
    }
}
