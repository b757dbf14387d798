#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod common;
mod geometry;
mod voxelization;
