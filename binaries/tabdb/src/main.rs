mod shell;

use {
    clap::{arg, ArgMatches, Command},
    executor::Session,
    snafu::prelude::*,
    std::{env, io, process},
    storage::DataDir,
    tracing_subscriber::EnvFilter,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(
        "no data directory, set `TABDB_DATADIR` or pass one with `-d <PATH>`"
    ))]
    NoDataDirectory,

    #[snafu(display("failed to read commands from stdin: {}", source))]
    ReadInput { source: io::Error },

    #[snafu(display("failed to write responses to stdout: {}", source))]
    WriteOutput { source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

const TABDB_DATADIR: &str = "TABDB_DATADIR";

const SHELL: &str = "shell";
const EXEC: &str = "exec";

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .arg(arg!(-v --verbose "print debug logs to stderr").global(true))
        .subcommand(
            Command::new(SHELL)
                .about("read commands from stdin, each one terminated by `;`")
                .arg(arg!(-d --data_dir <PATH> "data directory")),
        )
        .subcommand(
            Command::new(EXEC)
                .about("execute the given commands in order")
                .arg(arg!(-d --data_dir <PATH> "data directory"))
                .arg(arg!(<COMMAND> ... "commands to execute")),
        )
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some((SHELL, sub_matches)) => {
            let session = Session::new(data_dir(sub_matches)?);
            shell::run(session, io::stdin().lock(), io::stdout().lock())
        }
        Some((EXEC, sub_matches)) => {
            let mut session = Session::new(data_dir(sub_matches)?);
            let commands = sub_matches
                .get_many::<String>("COMMAND")
                .into_iter()
                .flatten();

            for command in commands {
                println!("{}", session.execute(command));
            }

            Ok(())
        }
        _ => unreachable!(),
    }
}

fn data_dir(matches: &ArgMatches) -> Result<DataDir> {
    let data_dir = match matches.get_one::<String>("data_dir") {
        Some(dir) => dir.into(),
        None => env::var(TABDB_DATADIR).map_err(|_| Error::NoDataDirectory)?,
    };

    Ok(DataDir::new(data_dir))
}

/// Logs go to stderr so responses on stdout stay clean. `RUST_LOG` overrides
/// the default filter.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("tabdb=debug,executor=debug,storage=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
