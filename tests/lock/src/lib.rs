//! Shared fixtures for the behavioral lock tests.

#![forbid(unsafe_code)]
