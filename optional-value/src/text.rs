use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::Optional;

impl<T: Display> Optional<T> {
    /// The text form of the value.
    /// An absent value is an empty string.
    pub fn marshal_text(&self) -> String {
        self.to_string()
    }
}

impl<T: FromStr> Optional<T> {
    /// Replace `self` with the value parsed from `text`.
    ///
    /// Empty text makes `self` absent. If `T` fails to parse the text
    /// `self` is left as it was and the error from `T` is returned.
    pub fn unmarshal_text(&mut self, text: &str) -> Result<(), T::Err> {
        *self = text.parse()?;
        Ok(())
    }
}

impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => Display::fmt(value, f),
            Self::Absent => Ok(()),
        }
    }
}

impl<T: FromStr> FromStr for Optional<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            #[cfg(feature = "logging")]
            log::trace!("empty text, optional is absent");
            return Ok(Self::Absent);
        }

        match s.parse() {
            Ok(value) => Ok(Self::Present(value)),
            Err(err) => {
                #[cfg(feature = "logging")]
                log::debug!("failed to parse optional value from {s:?}");
                Err(err)
            }
        }
    }
}
