//! The error raised by checked access on an empty [`Optional`](crate::Optional).

/// Returned by [`Optional::value`](crate::Optional::value) and
/// [`Optional::value_mut`](crate::Optional::value_mut) when the container is empty.
///
/// Carries no payload; the message is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BadOptionalAccess;

impl BadOptionalAccess {
    /// The fixed message reported through `Display`.
    pub const MESSAGE: &'static str = "bad optional access";
}

impl core::fmt::Display for BadOptionalAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for BadOptionalAccess {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_fixed_message() {
        assert_eq!(BadOptionalAccess.to_string(), "bad optional access");
    }

    #[test]
    fn test_boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(BadOptionalAccess);
        assert_eq!(err.to_string(), BadOptionalAccess::MESSAGE);
        assert!(std::error::Error::source(&*err).is_none());
    }
}
