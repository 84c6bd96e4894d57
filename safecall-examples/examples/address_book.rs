//! Extracts cities from an address book where any field may be missing.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example address_book
//! ```

use safecall_core::{of, prepare, Extract};

#[derive(Debug, Clone)]
struct Address {
    street: String,
    city: String,
}

#[derive(Debug, Clone, Default)]
struct Person {
    name: Option<String>,
    address: Option<Address>,
}

fn main() {
    let homer = Person {
        name: Some("Homer".to_string()),
        address: Some(Address {
            street: "742 Evergreen Terrace".to_string(),
            city: "Springfield".to_string(),
        }),
    };
    let stranger = Person::default();

    // Single-shot: one value, one traversal.
    let name = of(homer.clone())
        .step(|p| p.name)
        .get_or("Somebody".to_string());
    let city = of(homer.clone())
        .step(|p| p.address)
        .step_map(|a| a.city)
        .get_or("Unknown".to_string());
    println!("{name} lives in {city}");

    // Prepared: build the traversal once, apply it to a whole address book.
    let street_of = prepare::<Person>()
        .step(|p| p.address)
        .step_map(|a| a.street);

    let people = vec![Some(homer), Some(stranger), None];
    let streets: Vec<String> = people
        .into_iter()
        .map(street_of.as_fn_or("(no street on record)".to_string()))
        .collect();

    for street in streets {
        println!("{street}");
    }
}
