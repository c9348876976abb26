//! Domain value objects.
//!
//! Type-safe wrappers for the fields of a contact: its name, phone
//! numbers and birthday. Each is validated at construction time and is
//! immutable afterwards, so invalid data cannot be represented.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::{names_match, Name};
pub use phone::Phone;
