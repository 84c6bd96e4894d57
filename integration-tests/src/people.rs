//! A small address-book model used to exercise call chains end to end.

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

impl Address {
    pub fn new(street: &str, city: &str) -> Self {
        Self {
            street: street.to_string(),
            city: city.to_string(),
        }
    }
}

/// A person whose name and address may both be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    pub name: Option<String>,
    pub address: Option<Address>,
}

impl Person {
    /// A person known only by their address.
    pub fn at(address: Address) -> Self {
        Self {
            name: None,
            address: Some(address),
        }
    }

    /// A person with no recorded address.
    pub fn of_no_fixed_abode() -> Self {
        Self::default()
    }
}
