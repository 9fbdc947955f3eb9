#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const USER: &str = r#"
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// A registered account.
#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    #[dao("autoFill")]
    pub id: ObjectId, // user id
    #[dao("autoIncr:uid")]
    pub uid: i32, // sequence number
    /// Login name
    pub account: String,
    #[serde(skip)]
    pub session: Option<String>,
    #[dao("autoFill")]
    pub register_time: DateTime, // registration time
    secret: String,
}
"#;

pub const MAIL: &str = r#"
use mongodb::bson::{oid::ObjectId, DateTime};

pub struct Mail {
    #[column("_id")]
    #[dao("autoFill")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[dao("autoFill")]
    pub send_time: DateTime,
}

#[cfg(test)]
mod tests {
    pub struct User {
        pub id: i32,
    }
}
"#;

/// A throwaway crate with models under `src/model`.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"app\"\nversion = \"0.1.0\"\nedition = \"2021\"\n",
        )
        .unwrap();

        let fixture = Self { dir };
        fixture.write("src/lib.rs", "pub mod dao;\npub mod model;\n");
        fixture.write("src/model/mod.rs", "mod mail;\nmod user;\n");
        fixture
    }

    /// The default fixture: `User` and `Mail` in their own files.
    pub fn with_models() -> Self {
        let fixture = Self::new();
        fixture.write("src/model/user.rs", USER);
        fixture.write("src/model/mail.rs", MAIL);
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }
}

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
