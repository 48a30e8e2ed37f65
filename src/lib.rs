//! error values that remember where they were built and what caused them.
//!
//! [`err`] and [`err_with`] build [`Error`] values carrying a message, an
//! optional cause and the call site they were built at. Causes form a chain
//! that can be walked with [`causes`] or [`for_each_cause`], and membership
//! in a chain is tested with [`one_cause_of`] (identity) or [`has_cause`]
//! (value equality).
//!
//! ```
//! use errlink::{err, err_with, one_cause_of, Cause};
//!
//! let disk: Cause = err("disk unreachable").into();
//! let save = err_with("could not save report", disk.clone());
//!
//! assert!(one_cause_of(Some(&save), Some(&*disk)));
//! ```

pub mod link;
pub mod site;

pub use link::{
    cause_of, causes, err, err_with, file_of, for_each_cause, has_cause, line_of, one_cause_of,
    site_of, AnyError, Cause, Causes, Error, Result,
};
pub use site::Site;
