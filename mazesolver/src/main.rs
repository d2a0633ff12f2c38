use std::{
    io::{self, Write as _},
    path::PathBuf,
    time::Duration,
};

use mazecore::algorithms::Strategy;
use mazesolver::{
    app::{self, AppError, RunConfig},
    logging,
    renderer::Terminal,
    settings::{LogLevel, Settings},
};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazesolver")]
struct Args {
    #[clap(short, long, help = "Number of columns of the maze")]
    columns: Option<i32>,
    #[clap(short, long, help = "Number of rows of the maze")]
    rows: Option<i32>,
    #[clap(short, long, help = "Seed for the maze, random if not given")]
    seed: Option<u64>,
    #[clap(long, help = "Pause after every animation step, in milliseconds")]
    delay_ms: Option<u64>,
    #[clap(long, action, help = "Only print the solved maze")]
    no_animate: bool,
    #[clap(long, action, help = "Use the call stack instead of an explicit one")]
    recursive: bool,
    #[clap(long, value_enum, help = "Minimal level of shown log messages")]
    log_level: Option<LogLevel>,
    #[clap(long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    better_panic::install();
    logging::init(args.log_level.unwrap_or_default().into());

    let result = run(args);

    // Anything not flushed after the animation, including errors from loading settings.
    logging::get_logger().flush_to(&mut io::stderr())?;
    result
}

fn run(args: Args) -> Result<(), AppError> {
    let settings_path = match &args.config {
        Some(path) => path.clone(),
        None => Settings::default_path()?,
    };

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.reset_config {
        return Settings::reset_config(settings_path);
    }

    let settings = Settings::load(settings_path)?;

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    if args.log_level.is_none() {
        logging::get_logger().set_min_level(settings.get_log_level().into());
    }

    let mut config = RunConfig::from_settings(&settings);
    config.columns = args.columns.unwrap_or(config.columns);
    config.rows = args.rows.unwrap_or(config.rows);
    config.seed = args.seed;
    if let Some(delay_ms) = args.delay_ms {
        config.delay = Some(Duration::from_millis(delay_ms));
    }
    if args.no_animate {
        config.delay = None;
    }
    if args.recursive {
        config.strategy = Strategy::Recursive;
    }

    let result = if config.delay.is_some() {
        let _terminal = Terminal::enter()?;
        app::run(&config, io::stdout())
    } else {
        app::run(&config, io::sink())
    };

    // The terminal is back to normal here, buffered logs can go out.
    logging::get_logger().flush_to(&mut io::stderr())?;
    let outcome = result?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", outcome.frame)?;
    writeln!(
        stdout,
        "Seed {}, path of {} cells from {:?} to {:?}",
        outcome.seed,
        outcome.path.len(),
        outcome.path.entry(),
        outcome.path.exit()
    )?;

    Ok(())
}
