use age_engine::utils::{logger, parse, validation::Validate};
use age_engine::{
    ActivityRecord, ActivitySink, AgeEngine, AgeReport, CalendarDate, CliConfig, ComputeOptions,
    Instant, LifeStageProfile, TimeOfDay,
};
use chrono::{Datelike, Timelike};
use clap::Parser;

/// Stand-in for the host's append-only activity store: entries go to the log.
struct TracingActivitySink;

impl ActivitySink for TracingActivitySink {
    fn record(&self, entry: &ActivityRecord) {
        tracing::info!(
            action = %entry.action,
            input_date = %entry.input_date,
            years = entry.output_age.years,
            timestamp = %entry.timestamp,
            "activity recorded"
        );
    }
}

fn now_instant() -> age_engine::Result<Instant> {
    let now = chrono::Local::now().naive_local();
    Ok(Instant::new(
        CalendarDate::new(now.year(), now.month(), now.day())?,
        TimeOfDay::new(now.hour(), now.minute(), now.second())?,
    ))
}

fn build_options(config: &CliConfig) -> age_engine::Result<ComputeOptions> {
    let mut options = match &config.profile {
        Some(path) => {
            let profile = LifeStageProfile::from_file(path)?;
            profile.validate()?;
            profile.to_compute_options()?
        }
        None => ComputeOptions::default(),
    };
    if let Some(country) = &config.country {
        options.country = Some(country.clone());
    }
    if let Some(sex) = &config.sex {
        options.sex = Some(sex.parse()?);
    }
    Ok(options)
}

fn print_summary(report: &AgeReport) {
    let b = &report.breakdown;
    println!(
        "Age: {} years, {} months, {} weeks, {} days, {} hours, {} minutes",
        b.years, b.months, b.weeks, b.days, b.hours, b.minutes
    );
    println!(
        "Zodiac: {:?} (western), {:?} (chinese)",
        report.zodiac.western, report.zodiac.chinese
    );
    println!(
        "Next birthday: {} ({:?}), in {} days {} hours {} minutes",
        report.birthday.next_anniversary,
        report.birthday.weekday,
        report.birthday.countdown.days,
        report.birthday.countdown.hours,
        report.birthday.countdown.minutes
    );
    let life = &report.life_stage;
    if let Some(remaining) = life.life_expectancy_remaining {
        println!("Estimated life expectancy remaining: {:.1} years", remaining);
    }
    if let Some(delta) = life.biological_age_delta {
        println!("Biological age adjustment: {:+.1} years", delta);
    }
    if let Some(pet) = life.pet_age_equivalent {
        println!("Pet age equivalent: {:.1} human years", pet);
    }
    if let Some(pregnancy) = life.pregnancy {
        println!(
            "Due date: {} (trimesters from {} and {})",
            pregnancy.due_date, pregnancy.second_trimester_start, pregnancy.third_trimester_start
        );
    }
}

fn run(config: &CliConfig) -> age_engine::Result<()> {
    let birth = parse::parse_instant("birth", &config.birth)?;
    let reference = match &config.reference {
        Some(value) => parse::parse_instant("reference", value)?,
        None => now_instant()?,
    };
    let options = build_options(config)?;

    let engine = AgeEngine::new();
    let report = engine.compute(&birth, &reference, &options)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    let sink = TracingActivitySink;
    sink.record(&engine.activity_record(&birth.date, &report, reference.to_string()));

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        eprintln!("hint: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!("Computation failed: {}", e);
        eprintln!("{}", e);
        eprintln!("hint: {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    Ok(())
}
