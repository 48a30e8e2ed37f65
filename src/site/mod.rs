use std::fmt::{Display, Formatter};
use std::panic::Location;

/// A call site captured when an error value is built.
///
/// Capturing stores a single static reference; the file and line behind it
/// are only read out when asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Site {
    location: Option<&'static Location<'static>>,
}

impl Site {
    /// captures the call site of the nearest caller outside of
    /// `#[track_caller]` frames, so a `#[track_caller]` constructor calling
    /// this records the line of whoever called the constructor
    #[must_use]
    #[track_caller]
    pub fn capture() -> Self {
        Site {
            location: Some(Location::caller()),
        }
    }

    /// the empty site, reported for errors that were not built by this crate
    #[must_use]
    pub const fn none() -> Self {
        Site { location: None }
    }

    #[must_use]
    pub fn file(&self) -> &'static str {
        match self.location {
            Some(location) => location.file(),
            None => "",
        }
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        match self.location {
            Some(location) => location.line(),
            None => 0,
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Site::none()
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.location {
            Some(location) => write!(f, "{}:{}", location.file(), location.line()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn capture_points_at_the_caller() {
        let site = Site::capture();

        assert_eq!(file!(), site.file());
        assert_eq!(line!() - 3, site.line());
    }

    #[test]
    pub fn none_resolves_to_zero_values() {
        assert_eq!("", Site::none().file());
        assert_eq!(0, Site::none().line());
        assert_eq!(Site::none(), Site::default());
    }

    #[test]
    pub fn displays_as_file_and_line() {
        let site = Site::capture();

        assert_eq!(
            format!("{}:{}", site.file(), site.line()),
            format!("{site}")
        );
        assert_eq!("", format!("{}", Site::none()));
    }
}
