//! Invitee entity - Voce della lista invitati all'after-party

/// A roster entry. An empty `last_name` accepts any last name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invitee {
    pub first_name: &'static str,
    pub last_name: &'static str,
}

impl Invitee {
    pub const fn new(first_name: &'static str, last_name: &'static str) -> Self {
        Self {
            first_name,
            last_name,
        }
    }
}
