//! Lifecycle events, emitted through `tracing` when the `tracing` feature is on.
//!
//! Without the feature the macro expands to nothing, so the container pays no
//! cost for it.

/// Emits a TRACE-level lifecycle event for the contained type `$ty`.
macro_rules! lifecycle {
    ($event:literal, $ty:ty) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(
                target: "inline_optional",
                ty = core::any::type_name::<$ty>(),
                $event
            );
        }
    }};
}

pub(crate) use lifecycle;
