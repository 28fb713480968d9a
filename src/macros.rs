/// Expands to a doc string linking to a section of the JVM specification.
macro_rules! see_jvm_spec {
    ($chapter:literal, $section:literal $(, $sub:literal)*) => {
        concat!(
            "See the [JVM Specification §",
            $chapter, ".", $section $(, ".", $sub)*,
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $chapter,
            ".html#jvms-",
            $chapter, ".", $section $(, ".", $sub)*,
            ") for more information."
        )
    };
}

/// Forwards to [`tracing::trace!`] when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

/// Discards the event when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub(crate) use see_jvm_spec;
pub(crate) use trace;
