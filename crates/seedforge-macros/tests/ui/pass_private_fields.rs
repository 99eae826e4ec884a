mod model {
    use seedforge::prelude::*;

    #[derive(SeedEntity)]
    pub struct Product {
        id: Uuid,
        sku: String,
        price_cents: i64,
        discontinued: bool,
    }

    impl Product {
        pub fn sku(&self) -> &str {
            &self.sku
        }
    }
}

fn main() {
    use seedforge::prelude::*;

    let product: model::Product = copy(&seed_record! { sku: "A-1", price_cents: 999 }).unwrap();
    assert_eq!(product.sku(), "A-1");
}
