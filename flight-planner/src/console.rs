//! Line-oriented query console.
//!
//! Reads one command per line and writes one result per command:
//!
//! ```text
//! dfs 1 5/5/2017 8:00
//! bfs 1 5/5/2017 8:00
//! connectivity 1 3
//! shortest_path 1 3 5/5/2017 8:00 5/5/2017 18:00
//! minimum_cost_path 1 3 5/5/2017 8:00 5/5/2017 18:00
//! all_paths 1 3 5/5/2017 8:00 5/5/2017 18:00
//! quit
//! ```
//!
//! A timestamp spans two whitespace-separated tokens, date then time.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::domain::{AirportId, InvalidId, Route, TimeError, Timestamp};
use crate::planner::Planner;

/// Error from parsing a console command.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(
        "unknown command {0:?}; available commands: dfs, bfs, connectivity, shortest_path, minimum_cost_path, all_paths, quit"
    )]
    UnknownCommand(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: unexpected input {extra:?}")]
    TrailingInput { command: &'static str, extra: String },

    #[error(transparent)]
    InvalidAirport(#[from] InvalidId),

    #[error("{command}: {source}")]
    InvalidTimestamp {
        command: &'static str,
        #[source]
        source: TimeError,
    },
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dfs {
        airport: AirportId,
        start: Timestamp,
    },
    Bfs {
        airport: AirportId,
        start: Timestamp,
    },
    Connectivity {
        from: AirportId,
        to: AirportId,
    },
    ShortestPath(Window),
    MinimumCostPath(Window),
    AllPaths(Window),
    Quit,
}

/// Origin, destination and travel window shared by the windowed commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub from: AirportId,
    pub to: AirportId,
    pub start: Timestamp,
    pub end: Timestamp,
}

struct Args<'a> {
    command: &'static str,
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn token(&mut self, argument: &'static str) -> Result<&'a str, ConsoleError> {
        self.tokens.next().ok_or(ConsoleError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn airport(&mut self, argument: &'static str) -> Result<AirportId, ConsoleError> {
        Ok(self.token(argument)?.parse()?)
    }

    fn timestamp(&mut self, argument: &'static str) -> Result<Timestamp, ConsoleError> {
        let date = self.token(argument)?;
        let time = self.token(argument)?;
        Timestamp::parse(&format!("{date} {time}")).map_err(|source| {
            ConsoleError::InvalidTimestamp {
                command: self.command,
                source,
            }
        })
    }

    fn window(&mut self) -> Result<Window, ConsoleError> {
        Ok(Window {
            from: self.airport("origin airport")?,
            to: self.airport("destination airport")?,
            start: self.timestamp("start time")?,
            end: self.timestamp("end time")?,
        })
    }

    fn finish(mut self) -> Result<(), ConsoleError> {
        let rest: Vec<&str> = self.tokens.by_ref().collect();
        if rest.is_empty() {
            Ok(())
        } else {
            Err(ConsoleError::TrailingInput {
                command: self.command,
                extra: rest.join(" "),
            })
        }
    }
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ConsoleError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };

        let command = match name {
            "dfs" => "dfs",
            "bfs" => "bfs",
            "connectivity" => "connectivity",
            "shortest_path" => "shortest_path",
            "minimum_cost_path" => "minimum_cost_path",
            "all_paths" => "all_paths",
            "quit" => "quit",
            other => return Err(ConsoleError::UnknownCommand(other.to_string())),
        };
        let mut args = Args { command, tokens };

        let parsed = match command {
            "dfs" => Command::Dfs {
                airport: args.airport("airport")?,
                start: args.timestamp("start time")?,
            },
            "bfs" => Command::Bfs {
                airport: args.airport("airport")?,
                start: args.timestamp("start time")?,
            },
            "connectivity" => Command::Connectivity {
                from: args.airport("origin airport")?,
                to: args.airport("destination airport")?,
            },
            "shortest_path" => Command::ShortestPath(args.window()?),
            "minimum_cost_path" => Command::MinimumCostPath(args.window()?),
            "all_paths" => Command::AllPaths(args.window()?),
            _ => Command::Quit,
        };
        args.finish()?;

        Ok(Some(parsed))
    }
}

fn join_airports(airports: &[AirportId]) -> String {
    airports
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command and render its result, one line per output line.
///
/// `Quit` renders nothing.
pub fn execute(planner: &Planner<'_>, command: &Command) -> String {
    match command {
        Command::Dfs { airport, start } => {
            let order = planner.traverse_depth_first(*airport, *start);
            format!("DFS Result: {}", join_airports(&order))
        }
        Command::Bfs { airport, start } => {
            let order = planner.traverse_breadth_first(*airport, *start);
            format!("BFS Result: {}", join_airports(&order))
        }
        Command::Connectivity { from, to } => {
            let result = planner.connectivity(*from, *to);
            if result.exists() {
                let routes: Vec<String> = result.routes.iter().map(Route::to_string).collect();
                format!("Connectivity Result: Exists, Routes: {}", routes.join("; "))
            } else {
                "Connectivity Result: No route found".to_string()
            }
        }
        Command::ShortestPath(w) => {
            match planner.shortest_path_time(w.from, w.to, w.start, w.end) {
                Some(found) => format!(
                    "Shortest Path Result: Exists, Flight IDs: {}, Total Time: {}",
                    found.route,
                    found.total.num_seconds()
                ),
                None => "Shortest Path Result: No route found".to_string(),
            }
        }
        Command::MinimumCostPath(w) => {
            match planner.shortest_path_cost(w.from, w.to, w.start, w.end) {
                Some(found) => format!(
                    "Minimum Cost Path Result: Exists, Flight IDs: {}, Total Cost: {}",
                    found.route, found.total
                ),
                None => "Minimum Cost Path Result: No route found".to_string(),
            }
        }
        Command::AllPaths(w) => {
            let routes = planner.all_paths(w.from, w.to, w.start, w.end);
            let header = format!("All Paths Result: {} paths found", routes.len());
            std::iter::once(header)
                .chain(
                    routes
                        .iter()
                        .enumerate()
                        .map(|(i, route)| format!("Path {}: {}", i + 1, route)),
                )
                .collect::<Vec<_>>()
                .join("\n")
        }
        Command::Quit => String::new(),
    }
}

/// Answer commands from `input` until `quit` or end of input.
///
/// Malformed commands produce an `Error: ...` line and the loop continues.
pub fn run<R: BufRead, W: Write>(
    planner: &Planner<'_>,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                debug!(?command, "Console command");
                writeln!(output, "{}", execute(planner, &command))?;
            }
            Err(err) => {
                debug!(error = %err, line = %line, "Rejected console command");
                writeln!(output, "Error: {err}")?;
            }
        }
        output.flush()?;
    }
    Ok(())
}
