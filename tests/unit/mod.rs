// Unit test suite entry point
// Parameterized tests over the public builders

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod grid_shape_tests;
