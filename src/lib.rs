#![deny(clippy::all)]

use std::fmt;
use std::fs::File;
use std::io;

use thiserror::Error;

use searcher::{GraphPath, Heuristics, SearchError, SearchOptions, Strategy};

pub mod problem;

pub use problem::{Problem, ProblemError};

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No heuristics provided. The {0} strategy needs a 'heuristics:' line")]
    MissingHeuristics(Strategy),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error(transparent)]
    Problem(#[from] ProblemError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Open the named input, where `-` or nothing means stdin.
pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, AppError> {
    let reader: BoxedRead = match filename {
        Some("-") | None => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| AppError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

/// The outcome of running one strategy on one problem.
#[derive(Debug, Clone)]
pub struct Report {
    pub strategy: Strategy,
    pub path: Option<GraphPath>,
    pub route: Option<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.path, &self.route) {
            (Some(path), Some(route)) if self.strategy.uses_weights() => {
                write!(f, "Path: {} (cost {})", route, path.cost())
            }
            (Some(path), Some(route)) => {
                let hops = path.len();
                write!(
                    f,
                    "Path: {} ({} {})",
                    route,
                    hops,
                    if hops == 1 { "hop" } else { "hops" }
                )
            }
            _ => write!(f, "No path found"),
        }
    }
}

/// Run a strategy against a parsed problem.
pub fn solve(
    problem: &Problem,
    strategy: Strategy,
    options: &SearchOptions,
) -> Result<Report, AppError> {
    let zero;
    let heuristics = match (&problem.heuristics, strategy.uses_heuristics()) {
        (Some(h), _) => h,
        (None, false) => {
            zero = Heuristics::zero(&problem.graph);
            &zero
        }
        (None, true) => return Err(AppError::MissingHeuristics(strategy)),
    };

    let path = strategy.search(
        &problem.graph,
        heuristics,
        problem.start,
        problem.goal,
        options,
    )?;
    let route = path.as_ref().map(|p| problem.graph.describe(p));

    Ok(Report {
        strategy,
        path,
        route,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn diamond() -> Problem {
        include_str!("../problems/diamond.txt").parse().unwrap()
    }

    fn campus() -> Problem {
        include_str!("../problems/campus.txt").parse().unwrap()
    }

    #[test]
    fn diamond_reports() {
        let p = diamond();
        let options = SearchOptions::default();
        let report = |s| solve(&p, s, &options).unwrap().to_string();
        assert_eq!(report(Strategy::AStar), "Path: A -> B -> D (cost 3)");
        assert_eq!(report(Strategy::Oracle), "Path: A -> B -> D (cost 3)");
        assert_eq!(report(Strategy::BreadthFirst), "Path: A -> B -> D (2 hops)");
    }

    #[test]
    fn campus_reports() {
        let p = campus();
        let options = SearchOptions::default();
        let report = |s| solve(&p, s, &options).unwrap().to_string();
        assert_eq!(
            report(Strategy::AStar),
            "Path: Gate -> Hall -> Cafe -> Dorm (cost 9)"
        );
        assert_eq!(
            report(Strategy::Oracle),
            "Path: Gate -> Hall -> Cafe -> Dorm (cost 9)"
        );
        assert_eq!(
            report(Strategy::BreadthFirst),
            "Path: Gate -> Library -> Lab -> Dorm (3 hops)"
        );
    }

    #[test]
    fn no_path() {
        let p = diamond().with_start("D").unwrap().with_goal("A").unwrap();
        let report = solve(&p, Strategy::AStar, &SearchOptions::default()).unwrap();
        assert!(report.path.is_none());
        assert_eq!(report.to_string(), "No path found");
    }

    #[test]
    fn undirected_finds_the_way_back() {
        let p = Problem::parse(include_str!("../problems/diamond.txt"), true)
            .unwrap()
            .with_start("D")
            .unwrap()
            .with_goal("A")
            .unwrap();
        let report = solve(&p, Strategy::Oracle, &SearchOptions::default()).unwrap();
        assert_eq!(report.to_string(), "Path: D -> B -> A (cost 3)");
    }

    #[test]
    fn heuristics_required_for_informed_search() {
        let p: Problem = "nodes: A B\nA B 5".parse().unwrap();
        assert!(matches!(
            solve(&p, Strategy::Oracle, &SearchOptions::default()),
            Err(AppError::MissingHeuristics(Strategy::Oracle))
        ));
        let report = solve(&p, Strategy::BreadthFirst, &SearchOptions::default()).unwrap();
        assert_eq!(report.to_string(), "Path: A -> B (1 hop)");
    }

    #[test]
    fn step_limit_surfaces() {
        let p = campus();
        let options = SearchOptions::default().with_limit(2);
        assert!(matches!(
            solve(&p, Strategy::AStar, &options),
            Err(AppError::Search(SearchError::StepLimitExhausted(2)))
        ));
    }

    #[test]
    fn missing_input_file() {
        let e = get_input_reader(Some("no/such/problem.txt")).err().unwrap();
        assert_eq!(e.to_string(), "Input not found: no/such/problem.txt");
    }
}
