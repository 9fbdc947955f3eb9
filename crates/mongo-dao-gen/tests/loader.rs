mod support;

use mongo_dao_gen::schema::Annotation;
use mongo_dao_gen::{DeclarationLoader, Error, SourceLoader};
use pretty_assertions::assert_eq;
use std_util::prelude::*;
use support::{names, Fixture};

#[test]
fn loads_requested_records() {
    let fixture = Fixture::with_models();
    let loader = SourceLoader::new(fixture.path("src/model"));

    let decls = assert_ok!(loader.load(&names(&["User", "Mail"])));
    assert_eq!(decls.len(), 2);

    let user = &decls[0];
    assert_eq!(user.name, "User");
    assert_eq!(user.package.path, "crate::model::user");
    assert_eq!(user.package.name, "user");
    assert_eq!(user.source.as_deref(), Some(fixture.path("src/model/user.rs").as_path()));

    let fields: Vec<_> = user.fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(fields, ["id", "uid", "account", "register_time"]);

    let id = &user.fields[0];
    assert_eq!(id.ty, "ObjectId");
    assert_eq!(
        id.annotations,
        [
            Annotation::new("serde.rename", "_id"),
            Annotation::new("dao", "autoFill"),
        ]
    );
    assert_eq!(id.comment.as_deref(), Some("user id"));

    let account = &user.fields[2];
    assert_eq!(account.docs, ["Login name"]);
    assert_eq!(account.comment, None);

    let mail = &decls[1];
    assert_eq!(mail.package.path, "crate::model::mail");
    assert_eq!(mail.fields[0].ty, "Option<ObjectId>");
}

#[test]
fn cfg_test_modules_are_not_scanned() {
    let fixture = Fixture::new();
    fixture.write("src/model/mail.rs", support::MAIL);

    // `Mail` declares a `User` inside `#[cfg(test)]` only.
    let loader = SourceLoader::new(fixture.path("src/model"));
    assert!(matches!(
        assert_err!(loader.load(&names(&["User"]))),
        Error::DeclarationNotFound { .. }
    ));
}

#[test]
fn inline_modules_extend_the_path() {
    let fixture = Fixture::new();
    fixture.write(
        "src/model/mod.rs",
        "pub mod account {\n    pub struct Profile {\n        pub nick: String,\n    }\n}\n",
    );

    let loader = SourceLoader::new(fixture.path("src/model"));
    let decls = assert_ok!(loader.load(&names(&["Profile"])));

    assert_eq!(decls[0].package.path, "crate::model::account");
}

#[test]
fn package_path_override() {
    let fixture = Fixture::with_models();
    let loader = SourceLoader::new(fixture.path("src/model")).package_path("crate::model");

    let decls = assert_ok!(loader.load(&names(&["User"])));
    assert_eq!(decls[0].package.path, "crate::model");
}

#[test]
fn missing_names_are_skipped() {
    let fixture = Fixture::with_models();
    let loader = SourceLoader::new(fixture.path("src/model"));

    let decls = assert_ok!(loader.load(&names(&["Order", "User"])));
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].name, "User");
}

#[test]
fn nothing_found() {
    let fixture = Fixture::with_models();
    let loader = SourceLoader::new(fixture.path("src/model"));

    match assert_err!(loader.load(&names(&["Order"]))) {
        Error::DeclarationNotFound { names, dir } => {
            assert_eq!(names, ["Order"]);
            assert_eq!(dir, fixture.path("src/model"));
        }
        err => panic!("unexpected error: {err}"),
    }
}

#[test]
fn ambiguous_declarations() {
    let fixture = Fixture::with_models();
    fixture.write("src/model/legacy/user.rs", support::USER);

    let loader = SourceLoader::new(fixture.path("src/model"));

    match assert_err!(loader.load(&names(&["User"]))) {
        Error::AmbiguousModule { name, candidates } => {
            assert_eq!(name, "User");
            assert_eq!(candidates.len(), 2);
            assert!(candidates[0].starts_with("crate::model::legacy::user"));
            assert!(candidates[1].starts_with("crate::model::user"));
        }
        err => panic!("unexpected error: {err}"),
    }
}

#[test]
fn private_and_tuple_structs_are_not_records() {
    let fixture = Fixture::new();
    fixture.write(
        "src/model/user.rs",
        "struct User { pub id: i32 }\npub struct Mail(pub i32);\n",
    );

    let loader = SourceLoader::new(fixture.path("src/model"));
    assert_err!(loader.load(&names(&["User", "Mail"])));
}

#[test]
fn generic_records_are_rejected() {
    let fixture = Fixture::new();
    fixture.write("src/model/page.rs", "pub struct Page<T> { pub items: Vec<T> }\n");

    let loader = SourceLoader::new(fixture.path("src/model"));
    assert!(matches!(
        assert_err!(loader.load(&names(&["Page"]))),
        Error::UnsupportedModel { .. }
    ));
}

#[test]
fn unparsable_files_are_skipped() {
    let fixture = Fixture::with_models();
    fixture.write("src/model/broken.rs", "pub struct Broken {");

    let loader = SourceLoader::new(fixture.path("src/model"));
    assert_eq!(assert_ok!(loader.load(&names(&["User"]))).len(), 1);
}

#[test]
fn unresolved_module() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("user.rs"), support::USER).unwrap();

    let loader = SourceLoader::new(dir.path());
    assert!(matches!(
        assert_err!(loader.load(&names(&["User"]))),
        Error::UnresolvedModule { .. }
    ));

    let loader = SourceLoader::new(dir.path()).package_path("models");
    assert_eq!(assert_ok!(loader.load(&names(&["User"])))[0].package.path, "models");
}

#[test]
fn names_are_required() {
    let fixture = Fixture::with_models();
    let loader = SourceLoader::new(fixture.path("src/model"));

    assert!(matches!(
        assert_err!(loader.load(&[])),
        Error::InvalidConfig(_)
    ));
}
