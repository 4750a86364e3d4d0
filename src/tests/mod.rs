pub mod test_utils;

mod timestamp_tests;
