use std::error;
use std::fmt;

#[derive(Debug)]
pub struct BatchError;

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Renaming was unsuccessful!")
    }
}

impl error::Error for BatchError {}
