//! Module containing the APIs for the JVM elements.

pub mod method;
