use std::io::Write;

use crate::{cmds, Cli, Result};

use clap::{App, Arg, ArgMatches, SubCommand};
use rvc::object::{self, Id, Object};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Show the content or type of a stored object")
        .arg(
            Arg::with_name("p")
                .short("p")
                .required_unless("t")
                .conflicts_with("t")
                .help("Pretty-print the object's content"),
        )
        .arg(
            Arg::with_name("t")
                .short("t")
                .help("Show the object's type"),
        )
        .arg(
            Arg::with_name("object")
                .required(true)
                .help("Hex ID of the object to show"),
        )
        .arg(Arg::with_name("repo").help("Repository to read from (default: discover from current directory)"))
}

pub(crate) fn run(cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let id: Id = matches.value_of("object").unwrap().parse()?;
    let repo = cmds::required_repo(matches)?;

    let object = object::get(&repo, &id)?;

    if matches.is_present("t") {
        writeln!(cli, "{}", object.kind())?;
        return Ok(());
    }

    match &object {
        Object::Blob(blob) => cli.write_all(blob.data())?,
        Object::Tree(tree) => {
            for entry in tree.entries() {
                writeln!(
                    cli,
                    "{} {}\t{}",
                    String::from_utf8_lossy(entry.mode()),
                    entry.id(),
                    String::from_utf8_lossy(entry.name())
                )?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::Cli;

    use rvc::object::{self, Blob, Object, Tree, TreeEntry};
    use rvc::repo::Repository;

    fn repo_with_blob() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        let o = Object::Blob(Blob::new(b"test content\n".to_vec()));
        let id = object::put(&repo, &o).unwrap();

        (dir, id.to_string())
    }

    #[test]
    fn pretty_prints_a_blob() {
        let (dir, id) = repo_with_blob();

        let stdout =
            Cli::run_with_args(vec!["cat-file", "-p", &id, dir.path().to_str().unwrap()]).unwrap();
        assert_eq!(stdout, b"test content\n");
    }

    #[test]
    fn prints_the_type() {
        let (dir, id) = repo_with_blob();

        let stdout =
            Cli::run_with_args(vec!["cat-file", "-t", &id, dir.path().to_str().unwrap()]).unwrap();
        assert_eq!(stdout, b"blob\n");
    }

    #[test]
    fn pretty_prints_a_tree() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        let blob = Object::Blob(Blob::new(b"test content\n".to_vec()));
        let blob_id = object::put(&repo, &blob).unwrap();

        let tree = Object::Tree(Tree::new(vec![TreeEntry::new(
            b"100644",
            b"a.txt",
            blob_id.clone(),
        )
        .unwrap()]));
        let tree_id = object::put(&repo, &tree).unwrap();

        let stdout = Cli::run_with_args(vec![
            "cat-file",
            "-p",
            &tree_id.to_string(),
            dir.path().to_str().unwrap(),
        ])
        .unwrap();

        let expected = format!("100644 {}\ta.txt\n", blob_id);
        assert_eq!(stdout, expected.as_bytes());
    }

    #[test]
    fn error_unknown_object() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();

        let err = Cli::run_with_args(vec![
            "cat-file",
            "-p",
            "0123456789abcdef0123456789abcdef01234567",
            dir.path().to_str().unwrap(),
        ])
        .unwrap_err();

        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn error_bad_id() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();

        let err = Cli::run_with_args(vec![
            "cat-file",
            "-p",
            "nothex",
            dir.path().to_str().unwrap(),
        ])
        .unwrap_err();

        assert!(err.to_string().contains("shorter than an object ID"));
    }
}
