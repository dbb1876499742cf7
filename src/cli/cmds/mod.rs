use std::{env, path::PathBuf};

use crate::{Cli, Result};

use clap::ArgMatches;
use rvc::repo::Repository;

mod cat_file;
mod hash_object;
mod init;

pub(crate) fn add_subcommands<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
    app.subcommand(cat_file::subcommand())
        .subcommand(hash_object::subcommand())
        .subcommand(init::subcommand())
}

pub(crate) fn dispatch(cli: &mut Cli) -> Result<()> {
    let matches = cli.arg_matches.clone();
    // ^^ Ugh. Need an independent copy of matches so we can still pass
    // the Cli struct through to subcommand imps.

    match matches.subcommand() {
        ("cat-file", Some(m)) => cat_file::run(cli, &m),
        ("hash-object", Some(m)) => hash_object::run(cli, &m),
        ("init", Some(m)) => init::run(cli, &m),
        _ => unreachable!(),
        // unreachable: Should have exited out with appropriate help or
        // error message if no subcommand was given.
    }
}

// Discover the repository a subcommand should operate on: the optional
// trailing `repo` argument if given, the current working directory
// otherwise. Discovery is required; absence is an error.
pub(crate) fn required_repo(matches: &ArgMatches) -> Result<Repository> {
    let start = match matches.value_of("repo") {
        Some(path) => PathBuf::from(path),
        None => env::current_dir()?,
    };

    match Repository::discover(&start, true)? {
        Some(repo) => Ok(repo),
        None => unreachable!(),
        // unreachable: required discovery either finds a repo or errors.
    }
}
