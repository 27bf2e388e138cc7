//! Serialization tests for `dims` live in `tests/`.
