mod result;

use std::fs;
use std::io::Write;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::ValueEnum;
use funpuzz_solver::asserts::FUNPUZZ_ASSERT_LEVEL_DEFINITION;
use funpuzz_solver::asserts::FUNPUZZ_ASSERT_MODERATE;
use funpuzz_solver::branching::value_selection::ValueSelection;
use funpuzz_solver::branching::variable_selection::VariableSelection;
use funpuzz_solver::model::binary_ne_grid;
use funpuzz_solver::model::caged_csp_model;
use funpuzz_solver::model::nary_ad_grid;
use funpuzz_solver::model::Board;
use funpuzz_solver::model::GridEncoding;
use funpuzz_solver::propagation::PropagatorKind;
use funpuzz_solver::puzzle::Puzzle;
use funpuzz_solver::search::termination::Combinator;
use funpuzz_solver::search::termination::DecisionBudget;
use funpuzz_solver::search::termination::TimeBudget;
use funpuzz_solver::search::BacktrackingSearch;
use funpuzz_solver::search::EnumerationStatus;
use funpuzz_solver::search::SatisfactionResult;
use funpuzz_solver::search::SearchOptions;
use funpuzz_solver::statistics::enable_statistics;
use funpuzz_solver::statistics::statistics_enabled;
use funpuzz_solver::statistics::StatisticBlock;
use funpuzz_solver::statistics::StatisticFormat;
use funpuzz_solver::Solution;
use itertools::Itertools;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::FunPuzzResult;

const SOLUTION_SEPARATOR: &str = "----------";
const SEARCH_COMPLETE: &str = "==========";
const UNSATISFIABLE: &str = "=====UNSATISFIABLE=====";
const UNKNOWN: &str = "=====UNKNOWN=====";

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The puzzle to solve, e.g. `[[3],[11,21,3,0],[12,22,2,1],[13,23,33,6,3],[31,32,5,0]]`.
    ///
    /// The first list holds the size of the grid. Every other list is a cage: either a cell
    /// followed by its value, or the cells of the cage followed by the target and the operation
    /// (0 = add, 1 = subtract, 2 = divide, 3 = multiply). A cell is written as its row digit
    /// followed by its column digit, both starting at 1.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// Which model of the puzzle is solved.
    ///
    /// The grid-only models ignore the cages.
    #[arg(long, value_enum, default_value_t)]
    model: ModelKind,

    /// How the caged model encodes the rows and columns of the grid.
    #[arg(long, value_enum, default_value_t)]
    grid_encoding: GridEncoding,

    /// The propagator which is called after every assignment.
    #[arg(long, value_enum, default_value_t)]
    propagator: PropagatorKind,

    /// Determines which variable is assigned next.
    #[arg(long, value_enum, default_value_t)]
    variable_selection: VariableSelection,

    /// Determines in which order the values of a variable are tried.
    #[arg(long, value_enum, default_value_t)]
    value_selection: ValueSelection,

    /// The random seed to use for the Pseudo Random Number Generator.
    ///
    /// Only used by the random value selection.
    ///
    /// Possible values: u64
    #[arg(
        short = 'r',
        long = "random-seed",
        default_value_t = 42,
        verbatim_doc_comment
    )]
    random_seed: u64,

    /// The time budget for the search, given in milliseconds.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// The maximum number of decisions the search is allowed to make.
    ///
    /// Possible values: u64 (Optional)
    #[arg(long = "decision-limit", verbatim_doc_comment)]
    decision_limit: Option<u64>,

    /// Instructs the solver to report all solutions instead of stopping at the first one.
    ///
    /// Possible values: bool
    #[arg(short = 'a', long = "all-solutions", verbatim_doc_comment)]
    all_solutions: bool,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModelKind {
    /// Only the grid, with binary not-equal constraints.
    BinaryNotEqual,
    /// Only the grid, with all-different constraints.
    AllDifferent,
    /// The grid and the cages.
    #[default]
    Caged,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        enable_statistics(StatisticFormat::minizinc(), None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> FunPuzzResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if FUNPUZZ_ASSERT_LEVEL_DEFINITION >= FUNPUZZ_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the assert level is set to {FUNPUZZ_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active."
        );
    }

    let puzzle: Puzzle = fs::read_to_string(&args.instance_path)?.parse()?;

    let (mut csp, board) = match args.model {
        ModelKind::BinaryNotEqual => binary_ne_grid(&puzzle)?,
        ModelKind::AllDifferent => nary_ad_grid(&puzzle)?,
        ModelKind::Caged => caged_csp_model(&puzzle, args.grid_encoding)?,
    };
    info!(
        "Built the {:?} model with {} variables and {} constraints",
        args.model,
        csp.num_variables(),
        csp.num_constraints()
    );

    let options = SearchOptions {
        propagator: args.propagator,
        variable_selection: args.variable_selection,
        value_selection: args.value_selection,
        random_seed: args.random_seed,
    };
    let mut search = BacktrackingSearch::new(&csp, options);

    let time_limit = args.time_limit.map(Duration::from_millis);
    let mut termination = Combinator::new(
        time_limit.map(TimeBudget::starting_now),
        args.decision_limit.map(DecisionBudget::new),
    );

    if args.all_solutions {
        let status = search.enumerate_solutions(&mut csp, &mut termination, |solution| {
            print_solution(&board, solution);
            ControlFlow::Continue(())
        });
        let num_solutions = search.statistics().num_solutions;

        match status {
            EnumerationStatus::Exhausted if num_solutions == 0 => println!("{UNSATISFIABLE}"),
            EnumerationStatus::Exhausted => println!("{SEARCH_COMPLETE}"),
            EnumerationStatus::Terminated if num_solutions == 0 => println!("{UNKNOWN}"),
            EnumerationStatus::Terminated | EnumerationStatus::StoppedByCallback => {}
        }
    } else {
        match search.satisfy(&mut csp, &mut termination) {
            SatisfactionResult::Satisfiable(solution) => print_solution(&board, &solution),
            SatisfactionResult::Unsatisfiable => println!("{UNSATISFIABLE}"),
            SatisfactionResult::Unknown => println!("{UNKNOWN}"),
        }
    }

    if statistics_enabled() {
        let mut block = StatisticBlock::default();
        search.statistics().add_to(&mut block);
        let _ = block
            .add("variables", csp.num_variables())
            .add("constraints", csp.num_constraints())
            .add("cages", puzzle.cages().len());
        block.log();
    }

    Ok(())
}

fn print_solution(board: &Board, solution: &Solution) {
    for row in board {
        println!("{}", row.iter().map(|&cell| solution.value(cell)).join(" "));
    }
    println!("{SOLUTION_SEPARATOR}");
}
