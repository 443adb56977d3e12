use std::fmt::{Display, Formatter};

/// Path related property of a [`VFile`](crate::VFile)
///
/// The order of the variants is the order in which fields are renamed
/// when several of them appear in one [`Spec`](crate::Spec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Full path (`'~/index.min.js'`)
    Path,
    /// File name with extension (`'index.min.js'`)
    Basename,
    /// File name without extension (`'index.min'`)
    Stem,
    /// Extension with leading dot (`'.js'`)
    Extname,
    /// Parent directory (`'~'`)
    Dirname,
}

impl Field {
    /// All fields in renaming order
    pub const ALL: [Field; 5] = [
        Field::Path,
        Field::Basename,
        Field::Stem,
        Field::Extname,
        Field::Dirname,
    ];

    /// Position of the field in renaming order
    pub fn precedence(&self) -> usize {
        match self {
            Field::Path => 0,
            Field::Basename => 1,
            Field::Stem => 2,
            Field::Extname => 3,
            Field::Dirname => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Path => "path",
            Field::Basename => "basename",
            Field::Stem => "stem",
            Field::Extname => "extname",
            Field::Dirname => "dirname",
        }
    }
}

impl TryFrom<&str> for Field {
    type Error = ();

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value {
            "path" => Ok(Field::Path),
            "basename" => Ok(Field::Basename),
            "stem" => Ok(Field::Stem),
            "extname" => Ok(Field::Extname),
            "dirname" => Ok(Field::Dirname),
            _ => Err(()),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
