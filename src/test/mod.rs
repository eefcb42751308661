// Code used in the crate test suite.

mod test_types;
