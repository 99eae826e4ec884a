use seedforge::prelude::*;

#[derive(SeedEntity)]
pub struct Tag {
    id: Uuid,
    #[seed(skip)]
    label: String,
}

fn main() {}
