mod common;
use common::*;

use vfile_rename::error::{RenameError, VFileError};
use vfile_rename::*;

#[test]
fn rename_returns_the_file() {
    let renamed = rename(file("index.js"), "main.js").unwrap();
    assert_eq!(Some("main.js"), renamed.path());
}

#[test]
fn rename_ignores_missing_renames() {
    let renamed = rename(file("index.js"), Renames::Nothing).unwrap();
    assert_eq!(Some("index.js"), renamed.path());
    assert_eq!(vec!["index.js", "index.js"], renamed.history);
}

#[test]
fn rename_creates_files() {
    assert_eq!("", rename(VFile::default(), None::<Renames>).unwrap().to_string());
    assert_eq!("!", rename("!", None::<Renames>).unwrap().to_string());
    let options = VFileOptions {
        path: Some("/".to_string()),
        ..Default::default()
    };
    assert_eq!(Some("/"), rename(options, None::<Renames>).unwrap().path());
}

#[test]
fn rename_extname_and_dotfiles() {
    assert_eq!(Some("index.ts"), rename(file("index.js"), ".ts").unwrap().path());
    assert_eq!(Some(".dot.js"), rename(file(".dot"), ".js").unwrap().path());
}

#[test]
fn rename_custom_move() {
    let m = Move::custom(|f: &mut VFile| f.set_stem("main"));
    assert_eq!(Some("main.js"), rename(file("index.js"), m.clone()).unwrap().path());
    assert_eq!(Some("main"), rename(VFile::default(), m).unwrap().path());
}

#[test]
fn rename_specs() {
    let renamed = rename(file("index.js"), Spec::new().with("stem", "main")).unwrap();
    assert_eq!(Some("main.js"), renamed.path());

    let renamed = rename(
        file("index.js"),
        Spec::new().with("stem", "readme").with("extname", ".md"),
    )
    .unwrap();
    assert_eq!(Some("readme.md"), renamed.path());

    let options = VFileOptions {
        basename: Some("index.js".to_string()),
        dirname: Some("example".to_string()),
        ..Default::default()
    };
    let renamed = rename(
        options,
        Spec::new()
            .with("stem", Affix::suffix("-1"))
            .with("dirname", Affix::prefix("an-")),
    )
    .unwrap();
    assert_eq!(Some(minpath::join(&["an-example", "index-1.js"]).as_str()), renamed.path());
}

#[test]
fn rename_multiple_renames_collapse_history() {
    let renames = Renames::from(vec![
        Renames::from("readme.htm"),
        Spec::new()
            .with("stem", "index")
            .with("extname", Affix::suffix("l"))
            .into(),
    ]);
    let renamed = rename(file("main.md"), renames).unwrap();
    assert_eq!(Some("index.html"), renamed.path());
    assert_eq!(vec!["main.md", "index.html"], renamed.history);
}

#[test]
fn rename_json_renames() {
    let renames =
        Renames::from_json(r#"["readme.htm", {"stem": "index", "extname": {"suffix": "l"}}]"#)
            .unwrap();
    let renamed = rename(file("main.md"), renames).unwrap();
    assert_eq!(Some("index.html"), renamed.path());
}

#[test]
fn rename_fails_on_invalid_instruction() {
    let err = Renames::from_json("1").unwrap_err();
    assert_eq!(&RenameError::InvalidInstruction, err.current_context());
    assert_eq!(
        "Expected function, string, array, or object as renames",
        err.current_context().to_string()
    );
}

#[test]
fn rename_fails_on_non_path_properties() {
    let err = rename(VFile::default(), Spec::new().with("other", "!")).unwrap_err();
    assert_eq!(
        "Cannot rename `other`: it's not a path property",
        err.current_context().to_string()
    );
}

#[test]
fn rename_fails_on_pathless_files() {
    let err = rename(VFile::default(), Spec::new().with("extname", ".js")).unwrap_err();
    assert_eq!(
        Some("Setting `extname` requires `path` to be set too".to_string()),
        err.downcast_ref::<VFileError>().map(ToString::to_string)
    );
}

#[test]
fn convert_move_shared_between_threads() {
    let m = convert(&Spec::new().with("extname", ".md").into()).unwrap();
    let handles = (0..4)
        .map(|i| {
            let m = m.clone();
            std::thread::spawn(move || {
                let mut f = file(&format!("doc{i}.txt"));
                m.apply(&mut f).unwrap();
                f
            })
        })
        .collect::<Vec<_>>();
    for (i, handle) in handles.into_iter().enumerate() {
        let f = handle.join().unwrap();
        assert_eq!(Some(format!("doc{i}.md").as_str()), f.path());
    }
}

testit!(batch__literal, |env| {
    env.cfg().inputs = vec!["a/index.js".to_string(), "b/main.js".to_string()];
    env.cfg().renames = ".ts".into();
    env.assert_paths(&["a/index.ts", "b/main.ts"]);
});

testit!(batch__spec, |env| {
    env.cfg().inputs = vec!["src/lib.rs".to_string(), "lib.rs".to_string()];
    env.cfg().renames = Spec::new()
        .with("dirname", Affix::prefix("old/"))
        .with("stem", Affix::new("_", "_"))
        .into();
    env.assert_paths(&["old/src/_lib_.rs", "old/_lib_.rs"]);
});

testit!(batch__single_thread, |env| {
    env.cfg().num_threads = 1;
    env.cfg().inputs = (0..10).map(|i| format!("{i}.txt")).collect();
    env.cfg().renames = Renames::from(vec![".md", "readme.md"]);
    let files = env.run().unwrap();
    assert_eq!(10, files.len());
    for f in files {
        assert_eq!(Some("readme.md"), f.path());
        assert_eq!(2, f.history.len());
    }
});

testit!(batch__failure, |env| {
    env.cfg().inputs = vec!["index.js".to_string()];
    env.cfg().renames = Spec::new().with("extname", "js").into();
    let err = env.run().unwrap_err();
    assert_eq!(
        Some(&VFileError::ExtnameDot),
        err.downcast_ref::<VFileError>()
    );
    env.cfg().renames = Spec::new().with("size", "1").into();
    let err = env.run().unwrap_err();
    assert!(err.contains::<RenameError>());
});
