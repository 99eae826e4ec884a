use seedforge::prelude::*;

#[derive(SeedEntity)]
pub struct Wrapper<T> {
    id: Uuid,
    value: T,
}

fn main() {}
