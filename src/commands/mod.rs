pub mod auth;
pub mod feed;
pub mod matches;
pub mod profile;

use crate::error::AppError;
use crate::messages;

/// Print the user-facing line for a failed operation and pass the error on
/// so the process can exit non-zero.
pub(crate) fn report(err: AppError, fallback: &str) -> AppError {
    eprintln!("{}", messages::user_facing(&err, fallback));
    err
}
