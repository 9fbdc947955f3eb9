use clap::Parser;
use mongo_dao_gen::Style;
use mongo_dao_gen_cli::Cli;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std_util::prelude::*;

const USER: &str = r#"
use mongodb::bson::oid::ObjectId;

pub struct User {
    #[serde(rename = "_id")]
    #[dao("autoFill")]
    pub id: ObjectId,
    pub account: String,
}
"#;

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"app\"\nversion = \"0.1.0\"\nedition = \"2021\"\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("src/model")).unwrap();
    fs::write(dir.path().join("src/model/user.rs"), USER).unwrap();
    dir
}

fn args(root: &Path, extra: &[&str]) -> Vec<String> {
    let mut args = vec![
        "mongo-dao-gen".to_string(),
        "--model-dir".to_string(),
        root.join("src/model").display().to_string(),
        "--dao-dir".to_string(),
        root.join("src/dao").display().to_string(),
    ];
    args.extend(extra.iter().map(|arg| arg.to_string()));
    args
}

#[test]
fn parse_flags() {
    let cli = assert_ok!(Cli::try_parse_from([
        "mongo-dao-gen",
        "--model-dir",
        "src/model",
        "--model-names",
        "User,Mail",
        "--sub-pkg-enable",
        "--sub-pkg-style",
        "lower",
        "--file-name-style",
        "kebab",
        "--counter-name",
        "Seq",
        "--dry-run",
        "-vv",
    ]));

    assert!(cli.dry_run);
    assert_eq!(cli.verbose, 2);

    let config = assert_ok!(cli.config.resolve());
    assert_eq!(config.model_dir, PathBuf::from("src/model"));
    assert_eq!(config.model_names, ["User", "Mail"]);
    assert!(config.sub_pkg_enable);
    assert_eq!(config.sub_pkg_style, Style::Lower);
    assert_eq!(config.file_name_style, Style::Kebab);
    assert_eq!(config.counter_name, "Seq");
    assert_eq!(config.dao_dir, PathBuf::from("dao"));
}

#[test]
fn reject_unknown_style() {
    assert_err!(Cli::try_parse_from([
        "mongo-dao-gen",
        "--file-name-style",
        "shouting",
    ]));
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dao-gen.toml");
    fs::write(
        &path,
        "model-names = [\"User\"]\ndao-dir = \"src/dao\"\ncounter-name = \"Seq\"\n",
    )
    .unwrap();

    let cli = assert_ok!(Cli::try_parse_from([
        "mongo-dao-gen",
        "--config",
        path.to_str().unwrap(),
        "--counter-name",
        "Ticket",
    ]));
    let config = assert_ok!(cli.config.resolve());

    assert_eq!(config.model_names, ["User"]);
    assert_eq!(config.dao_dir, PathBuf::from("src/dao"));
    assert_eq!(config.counter_name, "Ticket");
}

#[test]
fn missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let cli = assert_ok!(Cli::try_parse_from([
        "mongo-dao-gen",
        "--config",
        path.to_str().unwrap(),
    ]));
    let err = assert_err!(cli.config.resolve());

    assert!(err.to_string().contains("failed to load config"), "{err}");
}

#[test]
fn generate_files() {
    let dir = fixture();

    let cli = assert_ok!(Cli::try_parse_from(args(dir.path(), &["--model-names", "User"])));
    assert_ok!(cli.run());

    let dao = dir.path().join("src/dao");
    assert!(dao.join("user.rs").is_file());
    assert!(dao.join("internal/user.rs").is_file());

    let internal = fs::read_to_string(dao.join("internal/user.rs")).unwrap();
    assert!(internal.contains("use crate::model::user;"), "{internal}");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = fixture();

    let cli = assert_ok!(Cli::try_parse_from(args(
        dir.path(),
        &["--model-names", "User", "--dry-run"]
    )));
    assert_ok!(cli.run());

    assert!(!dir.path().join("src/dao").exists());
}

#[test]
fn run_without_model_names_fails() {
    let dir = fixture();

    let cli = assert_ok!(Cli::try_parse_from(args(dir.path(), &[])));
    let err = assert_err!(cli.run());

    assert!(format!("{err:#}").contains("no model names"), "{err:#}");
}
