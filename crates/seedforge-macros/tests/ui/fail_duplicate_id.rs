use seedforge::prelude::*;

#[derive(SeedEntity)]
pub struct Link {
    #[seed(id)]
    left: Uuid,
    #[seed(id)]
    right: Uuid,
}

fn main() {}
