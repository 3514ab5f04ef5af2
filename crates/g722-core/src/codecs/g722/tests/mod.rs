//! G.722 Test Suite
//!
//! Stream-level tests for the G.722 codec. Unit tests for the individual
//! DSP blocks live next to the code they cover.

mod utils;

mod decoder_tests;
mod reference_tests;
