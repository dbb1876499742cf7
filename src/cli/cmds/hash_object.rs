use std::{fs, io::Write};

use crate::{cmds, Cli, Result};

use clap::{App, Arg, ArgMatches, Error, ErrorKind, SubCommand};
use rvc::object::{self, Kind, Object};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Compute an object ID and write the object into the store")
        .arg(
            Arg::with_name("t")
                .short("t")
                .value_name("type")
                .help("Specify the type (default 'blob')"),
        )
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("File holding the object's payload"),
        )
        .arg(Arg::with_name("repo").help("Repository to write into (default: discover from current directory)"))
}

pub(crate) fn run(cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let kind = kind_from_args(matches)?;
    let repo = cmds::required_repo(matches)?;

    let data = fs::read(matches.value_of("file").unwrap())?;
    let object = Object::deserialize(kind, &data)?;

    let id = object::put(&repo, &object)?;
    writeln!(cli, "{}", id)?;

    Ok(())
}

fn kind_from_args(matches: &ArgMatches) -> Result<Kind> {
    match matches.value_of("t") {
        Some("blob") | None => Ok(Kind::Blob),
        Some("tree") => Ok(Kind::Tree),
        Some(_) => Err(Box::new(Error {
            message: "-t must be one of blob or tree".to_string(),
            kind: ErrorKind::InvalidValue,
            info: None,
        })),
    }
}
