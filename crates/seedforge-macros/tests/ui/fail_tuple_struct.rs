use seedforge::prelude::*;

#[derive(SeedEntity)]
pub struct Pair(Uuid, String);

fn main() {}
