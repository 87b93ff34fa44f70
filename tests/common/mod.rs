pub use pollwatch_test_utils::init_tracing;
