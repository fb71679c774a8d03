use std::io::{self, BufRead};

use clap::Parser;
use log::{debug, info};
use simplelog::LevelFilter;

use truth_table::enumerate::MAX_VARIABLES;
use truth_table::parser::DEFAULT_MAX_DEPTH;
use truth_table::preprocess::substitute;
use truth_table::{Config, TruthTable};

#[derive(Parser, Debug)]
#[command(name = "truth-table")]
#[command(version, about = "Print truth tables of propositional formulas")]
struct Cli {
    /// Formulas to tabulate; read from stdin, one per line, if none are given
    formulas: Vec<String>,

    /// Maximum number of variables per formula
    #[arg(long = "max-vars", default_value_t = 20)]
    max_vars: usize,

    /// Maximum nesting depth of a formula
    #[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Give every occurrence of a variable its own column
    #[arg(long)]
    keep_duplicates: bool,

    /// Do not rewrite words like `and`/`not` into symbols
    #[arg(long)]
    raw: bool,

    /// Only list the satisfying assignments
    #[arg(long)]
    models: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Cli {
    fn config(&self) -> Config {
        Config::default()
            .with_max_variables(self.max_vars)
            .with_max_depth(self.max_depth)
            .with_distinct_variables(!self.keep_duplicates)
    }
}

/// Tabulates one input line. Local errors are reported and swallowed.
fn process(line: &str, cli: &Cli, config: &Config) -> color_eyre::Result<bool> {
    let formula = if cli.raw { line.to_string() } else { substitute(line) };
    debug!("{:?} -> {:?}", line, formula);

    match TruthTable::build(&formula, config) {
        Ok(table) => {
            if cli.models {
                print!("{}", truth_table::table::render_models(&table));
            } else {
                print!("{}", table.render(config));
                println!("{}", table.classify());
            }
            println!();
            Ok(true)
        }
        Err(e) if e.is_local() => {
            eprintln!("error: {}: {}", line.trim(), e);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    if cli.max_vars > MAX_VARIABLES {
        info!("--max-vars {} clamped to {}", cli.max_vars, MAX_VARIABLES);
    }
    let config = cli.config();

    let mut failed = 0usize;
    if cli.formulas.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if !process(&line, &cli, &config)? {
                failed += 1;
            }
        }
    } else {
        for formula in &cli.formulas {
            if !process(formula, &cli, &config)? {
                failed += 1;
            }
        }
    }

    if failed > 0 {
        info!("{} formula(s) rejected", failed);
    }

    Ok(())
}
