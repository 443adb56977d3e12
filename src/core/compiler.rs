use crate::core::{Field, FieldValue, Move, Renames, Spec};
use crate::error::RenameError;
use error_stack::{Report, Result};

/// Create a [`Move`] from rename instructions
///
/// The move can be applied to any number of files. Nothing is applied here,
/// so a failure leaves every file untouched.
///
/// # Example
/// ```
/// use vfile_rename::{convert, Affix, Renames, Spec, VFile};
///
/// let renames = Renames::from(vec![
///     Renames::from("readme.htm"),
///     Spec::new().with("stem", "index").with("extname", Affix::suffix("l")).into(),
/// ]);
/// let m = convert(&renames).unwrap();
///
/// let mut file = VFile::with_path("main.md").unwrap();
/// m.apply(&mut file).unwrap();
/// assert_eq!(Some("index.html"), file.path());
/// assert_eq!(vec!["main.md", "index.html"], file.history);
/// ```
pub fn convert(renames: &Renames) -> Result<Move, RenameError> {
    let m = match renames {
        Renames::Nothing => Move::nothing(),
        Renames::Move(m) => m.clone(),
        Renames::Literal(value) => {
            let field = if value.starts_with('.') {
                Field::Extname
            } else {
                Field::Basename
            };
            Move::Set(field, value.clone())
        }
        Renames::Sequence(renames) => {
            let moves = renames
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    convert(r).map_err(|e| e.attach_printable(format!("in renames at index {i}")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Move::All(moves)
        }
        Renames::Spec(spec) => spec_factory(spec)?,
    };
    Ok(m)
}

/// Compile a spec into one composite move
///
/// Every key is checked before any move is created. Fields are renamed in
/// [`Field`] order, not in the order the keys were inserted.
fn spec_factory(spec: &Spec) -> Result<Move, RenameError> {
    let mut fields = Vec::with_capacity(spec.len());
    for (key, value) in spec.entries() {
        let field = Field::try_from(key)
            .map_err(|_| Report::new(RenameError::InvalidField(key.to_string())))?;
        fields.push((field, value));
    }
    fields.sort_by_key(|(field, _)| field.precedence());

    let mut moves = Vec::new();
    for (field, value) in fields {
        match value {
            FieldValue::Literal(v) => moves.push(Move::Set(field, v.clone())),
            FieldValue::Affix(affix) => {
                if let Some(prefix) = non_empty(&affix.prefix) {
                    moves.push(Move::Prefix(field, prefix.to_string()));
                }
                if let Some(suffix) = non_empty(&affix.suffix) {
                    moves.push(Move::Suffix(field, suffix.to_string()));
                }
            }
        }
    }
    log::debug!("compiled spec into {} move(s): {:?}", moves.len(), moves);

    Ok(Move::All(moves))
}

#[inline]
fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}
