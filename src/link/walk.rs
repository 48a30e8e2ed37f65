use crate::link::{AnyError, Cause, Error};
use crate::site::Site;
use std::ptr;

/// Iterates over an error and everything it was chained over, most recent
/// first.
pub struct Causes<'a> {
    next: Option<&'a AnyError>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a AnyError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = match current.downcast_ref::<Error>() {
            Some(chained) => chained.cause().map(|cause| &**cause),
            None => None,
        };
        Some(current)
    }
}

/// Starts a walk over `error` and its causes, most recent first.
///
/// The walk yields `error` itself, then each cause in turn, and ends after
/// the first value that is not a chained error or has no cause, so a
/// foreign terminal error is yielded too. Only links built by this crate are
/// followed; whatever `source()` chain a foreign error carries of its own
/// does not count. A cause has to exist before anything can chain over it
/// and errors never change once built, so chains hold no cycle and the walk
/// always ends.
#[must_use]
pub fn causes(error: Option<&AnyError>) -> Causes<'_> {
    Causes { next: error }
}

/// calls `visit` on `error` and on every cause below it, most recent first;
/// does nothing when there is no error
pub fn for_each_cause<F: FnMut(&AnyError)>(error: Option<&AnyError>, mut visit: F) {
    for current in causes(error) {
        visit(current);
    }
}

/// the cause `error` was chained over, or `None` when it has none or was
/// not built by this crate
#[must_use]
pub fn cause_of(error: Option<&AnyError>) -> Option<&Cause> {
    match error?.downcast_ref::<Error>() {
        Some(chained) => chained.cause(),
        None => None,
    }
}

/// the site `error` was built at, or [`Site::none`] for foreign errors
#[must_use]
pub fn site_of(error: Option<&AnyError>) -> Site {
    match error.and_then(|error| error.downcast_ref::<Error>()) {
        Some(chained) => chained.site(),
        None => Site::none(),
    }
}

/// the file `error` was built in, or `""` for foreign errors
#[must_use]
pub fn file_of(error: Option<&AnyError>) -> &'static str {
    site_of(error).file()
}

/// the line `error` was built at, or `0` for foreign errors
#[must_use]
pub fn line_of(error: Option<&AnyError>) -> u32 {
    site_of(error).line()
}

/// Tells whether `target` is `error` itself or one of its causes.
///
/// Errors are compared by identity: a [`Cause`] and its clones are one
/// error, two errors built separately are not, even from the same text.
/// A foreign error that merely compares equal to `target` is no match
/// either; [`has_cause`] is the one that matches by value. With no target,
/// only the absence of an error matches.
#[must_use]
pub fn one_cause_of(error: Option<&AnyError>, target: Option<&AnyError>) -> bool {
    let target = match target {
        Some(target) => target,
        None => return error.is_none(),
    };

    causes(error).any(|current| ptr::addr_eq(current, target))
}

/// Tells whether a value equal to `target` is `error` itself or one of its
/// causes.
///
/// Comparing needs `PartialEq` on the target's type, so a type that cannot
/// be compared is rejected at compile time instead of silently skipped.
/// Chained errors built by this crate expose no `PartialEq`; they are found
/// through [`one_cause_of`] alone.
#[must_use]
pub fn has_cause<T>(error: Option<&AnyError>, target: &T) -> bool
where
    T: std::error::Error + PartialEq + 'static,
{
    causes(error).any(|current| current.downcast_ref::<T>() == Some(target))
}
