//! A simple CLI tool for classifying gVote election data offline.
//! This uses the same classification and formatting as the server, and reads
//! the backend's own JSON output.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufReader, Write};

use clap::{Arg, ArgAction, ArgMatches, Command};
use rocket::serde::json::serde_json;
use serde::de::DeserializeOwned;

use gvote::model::{
    common::{Calendar, StateCode},
    deadline::Deadline,
    election::Election,
    view::{DeadlineSection, DeadlinesView, ElectionCard, ElectionListView},
};

const PROGRAM_NAME: &str = "gvote-cli";

const ABOUT_TEXT: &str = "List the elections and voting deadlines relevant to a US state.

EXIT CODES:
     0: Success.
     1: Error.";

const ELECTIONS_PATH: &str = "ELECTIONS_PATH";

const ELECTIONS_PATH_HELP: &str = "The path to a JSON list of elections,\n\
as returned by `GET /election`";

const STATE: &str = "state";

const STATE_HELP: &str = "Two-letter code of the state to list elections for";

const DEADLINES_PATH: &str = "deadlines";

const DEADLINES_PATH_HELP: &str = "The path to a JSON list of deadlines for the state,\n\
as returned by `GET /deadlines?state=<state>`";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .arg(
            Arg::new(ELECTIONS_PATH)
                .help(ELECTIONS_PATH_HELP)
                .action(ArgAction::Set)
                .required(true),
        )
        .arg(
            Arg::new(STATE)
                .long(STATE)
                .short('s')
                .help(STATE_HELP)
                .action(ArgAction::Set)
                .required(true),
        )
        .arg(
            Arg::new(DEADLINES_PATH)
                .long(DEADLINES_PATH)
                .short('d')
                .help(DEADLINES_PATH_HELP)
                .action(ArgAction::Set),
        )
}

/// Errors that this program may produce.
#[derive(Debug, Eq, PartialEq)]
enum Error {
    /// IO error described by the inner message.
    IO(String),
    /// Failed to decode a JSON dump.
    Format(String),
    /// Invalid command-line argument.
    Argument(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IO(msg) => write!(f, "IO error: {msg}"),
            Error::Format(msg) => write!(f, "Format error: {msg}"),
            Error::Argument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

/// Load a JSON dump.
fn load<T: DeserializeOwned>(path: &str) -> Result<T, Error> {
    let file = BufReader::new(File::open(path).map_err(|e| Error::IO(format!("{path}: {e}")))?);
    serde_json::from_reader(file).map_err(|e| Error::Format(format!("{path}: {e}")))
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IO(err.to_string())
    }
}

fn print_elections(
    out: &mut impl Write,
    heading: &str,
    cards: &[ElectionCard],
) -> io::Result<()> {
    writeln!(out, "{heading}:")?;
    if cards.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for card in cards {
        writeln!(out, "  {} - {} [id {}]", card.date, card.name, card.id)?;
    }
    Ok(())
}

fn print_deadlines(out: &mut impl Write, section: &DeadlineSection) -> io::Result<()> {
    writeln!(out, "{}", section.heading)?;
    for line in &section.lines {
        writeln!(out, "  {} {}", line.sentence, line.date)?;
    }
    Ok(())
}

/// Run the classification and print the results to `out`.
fn run(args: &ArgMatches, out: &mut impl Write) -> Result<(), Error> {
    // Valid as these arguments are required.
    let elections_path = args.get_one::<String>(ELECTIONS_PATH).unwrap();
    let state = args.get_one::<String>(STATE).unwrap();

    let state = state
        .parse::<StateCode>()
        .map_err(|e| Error::Argument(e.to_string()))?;
    let calendar = Calendar::default();

    let elections: Vec<Election> = load(elections_path)?;
    let view = ElectionListView::new(state.clone(), &elections, &calendar);
    print_elections(
        out,
        &format!("Elections in {}", view.state_name),
        &view.state_elections,
    )?;
    print_elections(out, "National elections", &view.national_elections)?;

    if let Some(deadlines_path) = args.get_one::<String>(DEADLINES_PATH) {
        let deadlines: Vec<Deadline> = load(deadlines_path)?;
        let view = DeadlinesView::new(state, deadlines, &calendar);
        for section in [&view.primary, &view.runoff, &view.general]
            .into_iter()
            .flatten()
        {
            writeln!(out)?;
            print_deadlines(out, section)?;
        }
    }

    Ok(())
}

fn main() {
    let args = cli().get_matches();

    if let Err(e) = run(&args, &mut io::stdout().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
