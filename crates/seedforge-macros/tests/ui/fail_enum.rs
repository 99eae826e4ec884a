use seedforge::prelude::*;

#[derive(SeedEntity)]
pub enum Shape {
    Circle,
}

fn main() {}
