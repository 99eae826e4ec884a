use seedforge::prelude::*;

#[derive(SeedEntity)]
pub struct Note {
    key: Uuid,
    text: String,
}

fn main() {}
