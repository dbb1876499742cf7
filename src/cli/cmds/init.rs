use std::{env, io::Write, path::PathBuf};

use crate::{Cli, Result};

use clap::{App, Arg, ArgMatches, SubCommand};
use rvc::repo::Repository;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty repository")
        .arg(
            Arg::with_name("directory")
                .help("Where to create the repository (default: current directory)"),
        )
}

pub(crate) fn run(cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let dir = match matches.value_of("directory") {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir()?,
    };

    let repo = Repository::init(&dir)?;

    writeln!(
        cli,
        "Initialized empty rvc repository in {}",
        repo.work_dir().display()
    )?;

    Ok(())
}
