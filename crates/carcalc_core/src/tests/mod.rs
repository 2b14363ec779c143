//! Cross-component tests for the comparison engine
//!
//! Tests are organized by topic:
//! - `properties` - Formula identities that hold for any valid input
//! - `scenarios` - End-to-end comparisons on realistic inputs
