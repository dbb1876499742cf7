use assert_cmd::Command;

// Invoke the built binary.
pub fn rvc() -> Command {
    Command::cargo_bin("rvc").unwrap()
}
