mod common;
mod factors;
mod matrix;
mod summary;
