mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{CalcArgs, Cli, Commands, CompareArgs, OutputArgs};
use promoroi::config::{self, CONFIG_FILE_NAME, LoadedConfig};
use promoroi::core::{self, presets, report};
use tracing::{Level, debug, warn};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Calc(args) => run_calc(args),
        Commands::Compare(args) => run_compare(args),
        Commands::Presets(args) => run_presets(args),
        Commands::Init(args) => {
            if args.config.is_some() {
                warn!("--config is ignored by `promoroi init`; writing ./{CONFIG_FILE_NAME}");
            }

            let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_calc(args: CalcArgs) -> Result<i32> {
    let loaded = load(&args.output)?;
    let overrides = args.overrides();
    if args.scenario.is_none() && overrides.is_empty() {
        debug!("no scenario or overrides given, using configured inputs");
    }

    let raw = core::resolve_inputs(&loaded.config, args.scenario.as_deref(), &overrides)?;
    let evaluation = core::evaluate(args.scenario.as_deref(), &raw);
    let exit = report::evaluate_exit(&evaluation, &loaded.config);

    if args.output.json || loaded.config.general.json {
        let json_report = report::JsonReport::new(&evaluation, &exit);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        report::print_human(&evaluation, &exit, &loaded.config);
    }

    if exit.ok { Ok(0) } else { Ok(1) }
}

fn run_compare(args: CompareArgs) -> Result<i32> {
    let loaded = load(&args.output)?;
    let evaluations = core::evaluate_scenarios(&loaded.config, &args.scenarios)?;
    let comparison = report::JsonComparison::new(&evaluations, &loaded.config);

    if args.output.json || loaded.config.general.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        report::print_comparison(&evaluations, &loaded.config);
    }

    if comparison.ok { Ok(0) } else { Ok(1) }
}

fn run_presets(args: OutputArgs) -> Result<i32> {
    let loaded = load(&args)?;
    let all = presets::all_presets(&loaded.config.scenarios);

    if args.json || loaded.config.general.json {
        println!("{}", serde_json::to_string_pretty(&all)?);
    } else {
        report::print_presets(&all);
    }

    Ok(0)
}

fn load(args: &OutputArgs) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    debug!(source = %loaded.source, "loaded config");
    Ok(loaded)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
