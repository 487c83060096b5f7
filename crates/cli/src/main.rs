// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use weekstay::{FixedListingCounter, ListingCounter, MatchCounts, SelectionReview, WidgetState};
use weekstay_bus::SelectionBus;
use weekstay_domain::{DaySelection, ScheduleConfig};
use weekstay_url::{
    DEFAULT_WEEKLY_FREQUENCY, SEARCH_BASE_URL, Separator, build_property_url, build_search_url,
    decode_days, encode_days,
};

/// WeekStay CLI - evaluate a weekly rental schedule from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Day list as Bubble day numbers, e.g. "2, 3, 4, 5, 6".
    /// Defaults to the Monday-Friday weeknight schedule.
    #[arg(short, long)]
    days: Option<String>,

    /// Minimum nights per week
    #[arg(long, default_value_t = 2)]
    min_nights: u8,

    /// Maximum nights per week
    #[arg(long, default_value_t = 5)]
    max_nights: u8,

    /// Accept gapped (non-contiguous) schedules
    #[arg(long)]
    allow_gaps: bool,

    /// Also print a property link for this listing ID
    #[arg(long)]
    property_id: Option<String>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

/// The full evaluation of one schedule, as reported to the caller.
#[derive(Debug, Serialize)]
struct ScheduleReport {
    /// Selected day names, ascending.
    days: Vec<String>,
    /// The canonical `days-selected` encoding.
    days_selected: String,
    /// Whether the schedule satisfies the configured rules.
    valid: bool,
    /// The visitor-facing message for an invalid schedule.
    message: Option<String>,
    /// Check-in day name; absent for an empty selection.
    check_in: Option<String>,
    /// Check-out day name; absent for an empty selection.
    check_out: Option<String>,
    /// Listings matching the schedule exactly.
    exact_matches: u32,
    /// Listings overlapping the schedule.
    partial_matches: u32,
    /// The "Explore rentals" search link.
    search_url: String,
    /// The property link, when a listing ID was given.
    property_url: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Evaluating weekly schedule");

    let config: ScheduleConfig =
        ScheduleConfig::new(args.min_nights, args.max_nights, !args.allow_gaps)?;
    let default_selection: DaySelection = DaySelection::weeknight();
    let selection: DaySelection =
        decode_days(args.days.as_deref().unwrap_or(""), &default_selection);

    let state: WidgetState = WidgetState::with_selection(config, default_selection, selection);
    let review: SelectionReview = state.review();

    if let Some(message) = review.verdict.message() {
        warn!("Schedule is invalid: {message}");
    }

    // Mirror what the page does on every change: publish for other widgets.
    let bus: SelectionBus = SelectionBus::new();
    bus.subscribe(|published| {
        tracing::debug!("Selection published to bus: {} days", published.len());
    });
    bus.publish(&state.selection);

    let counter: FixedListingCounter = FixedListingCounter {
        exact_per_day: 2,
        partial_per_day: 4,
    };
    let counts: MatchCounts = counter.counts_for(&state.selection);

    let search_url: String = build_search_url(&state.selection, SEARCH_BASE_URL)?;
    let property_url: Option<String> = args
        .property_id
        .as_deref()
        .map(|id| build_property_url(id, &state.selection, DEFAULT_WEEKLY_FREQUENCY));

    let report: ScheduleReport = ScheduleReport {
        days: state
            .selection
            .days()
            .iter()
            .map(|day| day.name().to_owned())
            .collect(),
        days_selected: encode_days(&state.selection, Separator::CommaSpace),
        valid: review.verdict.is_valid(),
        message: review.verdict.message().map(str::to_owned),
        check_in: review
            .stay
            .map(|stay| stay.check_in().name().to_owned()),
        check_out: review
            .stay
            .map(|stay| stay.check_out().name().to_owned()),
        exact_matches: counts.exact,
        partial_matches: counts.partial,
        search_url,
        property_url,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Prints the plain-text report.
fn print_report(report: &ScheduleReport) {
    if report.days.is_empty() {
        println!("No days selected");
    } else {
        println!("Selected days:  {}", report.days.join(", "));
        println!("days-selected:  {}", report.days_selected);
    }

    match &report.message {
        Some(message) => println!("Schedule:       INVALID - {message}"),
        None => println!("Schedule:       OK"),
    }

    if let (Some(check_in), Some(check_out)) = (&report.check_in, &report.check_out) {
        println!("Check-in:       {check_in}");
        println!("Check-out:      {check_out}");
    }

    println!(
        "Listings:       {} exact, {} partial",
        report.exact_matches, report.partial_matches
    );
    println!("Search URL:     {}", report.search_url);

    if let Some(property_url) = &report.property_url {
        println!("Property URL:   {property_url}");
    }
}
