//! Tests that drive `libris-common` and `libris-core` together through their
//! public APIs only.

mod billing;
mod support;
