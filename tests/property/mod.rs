// Property test suite entry point
// Grid, label and color invariants checked over random inputs

mod grid_properties;
