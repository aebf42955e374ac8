use serde::{Deserialize, Serialize};

/// A single dish or drink listing.
///
/// `price` is display text ("$18", "$12-18"); no arithmetic is ever
/// performed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub description: String,
    pub price: String,
}
