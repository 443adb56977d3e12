use crate::core::{convert, Renames};
use crate::error::RenameError;
use crate::vfile::{VFile, VFileCompatible};
use error_stack::Result;

/// Rename a file
///
/// When given something other than a [`VFile`], a new file is created from it
/// first. The instructions are then compiled with [`convert`] and applied.
///
/// # Example
/// ```
/// use vfile_rename::{rename, VFile};
///
/// let file = VFile::with_path("index.js").unwrap();
/// let file = rename(file, ".ts").unwrap();
/// assert_eq!(Some("index.ts"), file.path());
/// ```
pub fn rename(
    value: impl Into<VFileCompatible>,
    renames: impl Into<Renames>,
) -> Result<VFile, RenameError> {
    let mut file = VFile::new(value).map_err(|e| {
        e.change_context(RenameError::File)
            .attach_printable("cannot create file to rename")
    })?;
    rename_in_place(&mut file, renames)?;
    Ok(file)
}

/// Rename a file that is borrowed instead of owned
pub fn rename_in_place(
    file: &mut VFile,
    renames: impl Into<Renames>,
) -> Result<&mut VFile, RenameError> {
    let m = convert(&renames.into())?;
    log::debug!("renaming {:?} with {:?}", file.path(), m);
    m.apply(file).map_err(|e| {
        e.change_context(RenameError::File)
            .attach_printable(format!("cannot apply {m:?}"))
    })
}

#[cfg(test)]
mod ut {
    use super::*;
    use crate::core::{Affix, Move, Spec};
    use crate::vfile::{VFileError, VFileOptions};

    fn file(path: &str) -> VFile {
        VFile::with_path(path).unwrap()
    }

    #[test]
    fn test_returns_given_file() {
        let mut f = file("index.js");
        f.value = Some("contents".to_string());
        let renamed = rename(f, "main.js").unwrap();
        assert_eq!(Some("main.js"), renamed.path());
        assert_eq!(Some("contents"), renamed.value.as_deref());
    }

    #[test]
    fn test_missing_renames() {
        let renamed = rename(file("index.js"), None::<Renames>).unwrap();
        assert_eq!(Some("index.js"), renamed.path());
        assert_eq!(vec!["index.js", "index.js"], renamed.history);
    }

    #[test]
    fn test_creates_file() {
        assert_eq!("", rename(VFile::default(), Renames::Nothing).unwrap().to_string());
        assert_eq!("!", rename("!", Renames::Nothing).unwrap().to_string());
        let options = VFileOptions {
            path: Some("/".to_string()),
            ..Default::default()
        };
        assert_eq!(
            Some("/"),
            rename(options, Renames::Nothing).unwrap().path()
        );
    }

    #[test]
    fn test_create_failure() {
        let options = VFileOptions {
            dirname: Some("a".to_string()),
            ..Default::default()
        };
        let err = rename(options, "b").unwrap_err();
        assert_eq!(&RenameError::File, err.current_context());
        assert!(err.contains::<VFileError>());
    }

    #[test]
    fn test_custom_move() {
        let m = Move::custom(|f: &mut VFile| f.set_stem("main"));
        assert_eq!(Some("main.js"), rename(file("index.js"), m.clone()).unwrap().path());
        assert_eq!(Some("main"), rename(VFile::default(), m).unwrap().path());
    }

    #[test]
    fn test_spec_affix() {
        let f = VFile::new(VFileOptions {
            basename: Some("index.js".to_string()),
            dirname: Some("example".to_string()),
            ..Default::default()
        })
        .unwrap();
        let renamed = rename(
            f,
            Spec::new()
                .with("stem", Affix::suffix("-1"))
                .with("dirname", Affix::prefix("an-")),
        )
        .unwrap();
        assert_eq!(Some("an-example/index-1.js"), renamed.path());
    }

    #[test]
    fn test_in_place_chains() {
        let mut f = file("index.js");
        let path = rename_in_place(&mut f, ".ts")
            .unwrap()
            .path()
            .map(str::to_string);
        assert_eq!(Some("index.ts".to_string()), path);
        assert_eq!(Some("index.ts"), f.path());
    }

    #[test]
    fn test_collaborator_error_propagates() {
        let err = rename(VFile::default(), Spec::new().with("extname", ".js")).unwrap_err();
        assert_eq!(&RenameError::File, err.current_context());
        assert_eq!(
            Some(&VFileError::PathRequired(crate::core::Field::Extname)),
            err.downcast_ref::<VFileError>()
        );
    }

    #[test]
    fn test_invalid_field() {
        let err = rename(VFile::default(), Spec::new().with("other", "!")).unwrap_err();
        assert_eq!(
            &RenameError::InvalidField("other".to_string()),
            err.current_context()
        );
    }
}
