mod pipeline_tests;
pub mod utils;
