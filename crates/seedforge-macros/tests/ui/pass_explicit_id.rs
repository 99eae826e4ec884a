use seedforge::prelude::*;

#[seed_entity]
pub struct Currency {
    #[seed(id)]
    code_id: Uuid,
    #[seed(rename = "Symbol")]
    symbol: char,
    minor_units: u8,
}

fn main() {
    let rows = seed_data_with_unique_id::<Currency, _>(vec![
        seed_record! { Symbol: '$', minor_units: 2u8 },
    ])
    .unwrap();
    assert_ne!(rows[0].code_id, Uuid::nil());
}
