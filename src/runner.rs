//! A command line harness which reads the data of a [`Problem`] from a DZN file, builds the
//! [`Csp`] and searches for a solution with the chosen propagation strategy.
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use log::info;
use log::LevelFilter;

use crate::engine::termination::Combinator;
use crate::engine::termination::OsSignal;
use crate::engine::termination::TimeBudget;
use crate::engine::VariableId;
use crate::print_roster_assert_warning_message;
use crate::propagators::PropagationStrategy;
use crate::results::SatisfactionResult;
use crate::results::Solution;
use crate::statistics::configure;
use crate::BacktrackingSearch;
use crate::Csp;

#[derive(Debug, clap::Parser)]
pub struct Cli {
    /// The data for the problem.
    pub instance: PathBuf,

    /// The propagation strategy to use during search.
    #[arg(short = 'S', long = "strategy", value_enum, default_value_t)]
    pub strategy: PropagationStrategy,

    /// The number of seconds the search is allowed to run.
    ///
    /// If no time-out is provided, the search runs until it completes or is interrupted.
    #[arg(short = 'T', long = "time-out")]
    pub time_out: Option<u64>,

    /// Print the search statistics once the search finishes.
    #[arg(short = 's', long = "statistics")]
    pub log_statistics: bool,

    /// Enable debug logging.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// A group of variables which is printed when a solution is found.
#[derive(Clone, Debug)]
pub enum Output {
    Variable(VariableId),
    Array(String, Vec<VariableId>),
}

/// Definition of a problem instance which can be solved through [`run`].
pub trait Problem: Sized {
    /// Constructor function which creates an instance of `Self`, as well as the [`Csp`] for the
    /// problem.
    fn create(data: dzn_rs::DataFile<i32>) -> anyhow::Result<(Self, Csp)>;

    fn get_output_variables(&self) -> impl Iterator<Item = Output> + '_;
}

#[macro_export]
macro_rules! entry_point {
    (problem = $problem:ident) => {
        fn main() -> anyhow::Result<()> {
            $crate::runner::run::<$problem>()
        }
    };
}

pub fn run<ProblemType: Problem>() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;

    let args = Cli::parse();

    configure_logging(args.verbose);
    configure(args.log_statistics, "%% ");

    let data = std::fs::read_to_string(&args.instance)
        .with_context(|| format!("Error reading {}", args.instance.display()))?;

    let data = dzn_rs::parse::<i32>(data.as_bytes())
        .with_context(|| format!("Failed to parse DZN from {}", args.instance.display()))?;

    let (instance, mut csp) = ProblemType::create(data)?;

    solve(
        &mut csp,
        instance,
        args.strategy,
        args.time_out.map(Duration::from_secs),
    )
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "% {}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    print_roster_assert_warning_message!();
}

pub fn solve(
    csp: &mut Csp,
    instance: impl Problem,
    strategy: PropagationStrategy,
    time_out: Option<Duration>,
) -> anyhow::Result<()> {
    let propagator = strategy.propagator();
    let mut termination = Combinator::new(
        OsSignal::install()?,
        time_out.map(TimeBudget::starting_now),
    );
    let mut search = BacktrackingSearch::new(&propagator, &mut termination);

    match search.solve(csp) {
        SatisfactionResult::Satisfiable(solution) => {
            for output in instance.get_output_variables() {
                print_output(&output, csp, &solution);
            }

            println!("----------");
        }
        SatisfactionResult::Unsatisfiable => println!("UNSATISFIABLE"),
        SatisfactionResult::Unknown => println!("UNKNOWN"),
    }

    search.log_statistics();

    Ok(())
}

fn print_output(output: &Output, csp: &Csp, solution: &Solution) {
    match output {
        Output::Variable(variable) => {
            println!(
                "{} = {};",
                csp.variable_name(*variable),
                solution.value(*variable)
            );
        }

        Output::Array(name, variables) => {
            let values = variables
                .iter()
                .map(|&variable| solution.value(variable).to_string())
                .collect::<Vec<_>>();

            println!("{name} = [{}];", values.join(", "));
        }
    }
}
