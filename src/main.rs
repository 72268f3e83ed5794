use std::io::Read;

use anyhow::{Context, Error};
use clap::{value_t, App, Arg};
use tracing::{debug, Level};

use graphsearch::{get_input_reader, solve, Problem};
use searcher::{SearchOptions, Strategy};

fn main() {
    if let Err(e) = driver() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn driver() -> Result<(), Error> {
    let matches = App::new("graphsearch")
        .version("0.1")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find paths through small weighted graphs")
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .value_name("STRATEGY")
                .possible_values(&["bfs", "astar", "oracle"])
                .default_value("astar")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .value_name("NODE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .value_name("NODE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("undirected")
                .short("u")
                .long("undirected")
                .help("Add every edge in both directions"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("STEPS")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("progress")
                .short("p")
                .long("progress")
                .value_name("STEPS")
                .help("Log progress every STEPS steps")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Raise the log level"),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .required(false)
                .takes_value(true)
                .index(1),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let strategy: Strategy = value_t!(matches, "strategy", Strategy)?;

    let mut options = SearchOptions::default();
    if matches.is_present("limit") {
        options = options.with_limit(value_t!(matches, "limit", usize)?);
    }
    if matches.is_present("progress") {
        options = options.with_verbose(value_t!(matches, "progress", usize)?);
    }

    let filename = matches.value_of("input");
    let mut text = String::new();
    get_input_reader(filename)?
        .read_to_string(&mut text)
        .with_context(|| format!("Reading {}", filename.unwrap_or("stdin")))?;

    let mut problem = Problem::parse(&text, matches.is_present("undirected"))?;
    if let Some(start) = matches.value_of("start") {
        problem = problem.with_start(start)?;
    }
    if let Some(goal) = matches.value_of("goal") {
        problem = problem.with_goal(goal)?;
    }
    debug!(
        nodes = problem.graph.len(),
        edges = problem.graph.edge_count(),
        %strategy,
        "loaded problem"
    );

    let report = solve(&problem, strategy, &options)?;
    println!("{}", report);

    Ok(())
}
