//! Helpers shared by the integration tests of the solver.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use funpuzz_solver::puzzle::Cage;
use funpuzz_solver::puzzle::Operation;
use funpuzz_solver::puzzle::Puzzle;
use wait_timeout::ChildExt;

/// The values of a filled-in grid, indexed as `grid[row][column]`.
pub(crate) type Grid = Vec<Vec<i32>>;

pub(crate) fn puzzle_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("puzzles")
        .join(name)
}

pub(crate) fn load_puzzle(name: &str) -> Puzzle {
    std::fs::read_to_string(puzzle_path(name))
        .expect("puzzle file exists")
        .parse()
        .expect("valid puzzle")
}

/// What the binary printed, split into its parts.
#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) status: ExitStatus,
    pub(crate) solutions: Vec<Grid>,
    /// The line after the last solution, e.g. `==========`.
    pub(crate) final_line: Option<String>,
    /// The log and statistic lines, which start with `%`.
    pub(crate) comments: Vec<String>,
}

static NUM_RUNS: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn run_solver(instance_path: impl AsRef<Path>, args: &[&str]) -> SolverOutput {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let instance_path = instance_path.as_ref();
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_funpuzz-solver"));

    let file_stem = instance_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .expect("instance has a file name");
    let run = NUM_RUNS.fetch_add(1, Ordering::Relaxed);
    let log_file_path = PathBuf::from(env!("CARGO_TARGET_TMPDIR"))
        .join(format!("{file_stem}-{}-{run}.log", std::process::id()));

    let mut child = Command::new(solver)
        .args(args)
        .arg(instance_path)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let output = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    std::fs::remove_file(&log_file_path).expect("Failed to remove log file.");

    parse_output(status, &output)
}

fn parse_output(status: ExitStatus, output: &str) -> SolverOutput {
    let mut solutions = Vec::new();
    let mut final_line = None;
    let mut comments = Vec::new();
    let mut current: Grid = Vec::new();

    for line in output.lines() {
        if line.starts_with('%') {
            comments.push(line.to_owned());
        } else if line == "----------" {
            solutions.push(std::mem::take(&mut current));
        } else if line.starts_with("=====") {
            final_line = Some(line.to_owned());
        } else if !line.trim().is_empty() {
            let row = line
                .split_whitespace()
                .map(|value| value.parse::<i32>().expect("grid values are integers"))
                .collect();
            current.push(row);
        }
    }

    assert!(current.is_empty(), "incomplete solution in output:\n{output}");

    SolverOutput {
        status,
        solutions,
        final_line,
        comments,
    }
}

/// Check that `grid` is a solution of `puzzle`, or describe the first violation.
///
/// With `check_cages` set to false only the rows and columns are checked.
pub(crate) fn check_solution(
    puzzle: &Puzzle,
    grid: &Grid,
    check_cages: bool,
) -> Result<(), String> {
    let size = puzzle.size();
    let expected = (1..=size as i32).collect::<Vec<_>>();

    if grid.len() != size || grid.iter().any(|row| row.len() != size) {
        return Err(format!("the grid is not {size}x{size}"));
    }

    for index in 0..size {
        let mut row = grid[index].clone();
        row.sort();
        if row != expected {
            return Err(format!("row {} is not a permutation", index + 1));
        }

        let mut column = grid.iter().map(|row| row[index]).collect::<Vec<_>>();
        column.sort();
        if column != expected {
            return Err(format!("column {} is not a permutation", index + 1));
        }
    }

    if !check_cages {
        return Ok(());
    }

    for cage in puzzle.cages() {
        let values = cage
            .cells()
            .iter()
            .map(|cell| i64::from(grid[cell.row][cell.column]))
            .collect::<Vec<_>>();

        let satisfied = match cage {
            Cage::Given { value, .. } => values[0] == i64::from(*value),
            Cage::Arithmetic {
                target, operation, ..
            } => {
                let target = i64::from(*target);
                let sum = values.iter().sum::<i64>();
                let product = values.iter().product::<i64>();

                // `first - (sum - first) == target` for the subtraction, and
                // `first / (product / first) == target` for the division
                match operation {
                    Operation::Add => sum == target,
                    Operation::Multiply => product == target,
                    Operation::Subtract => values.iter().any(|first| 2 * first == target + sum),
                    Operation::Divide => {
                        values.iter().any(|first| first * first == target * product)
                    }
                }
            }
        };

        if !satisfied {
            return Err(format!("cage {cage:?} is violated by {values:?}"));
        }
    }

    Ok(())
}
