//! Guest matcher - Chi riceve l'invito segreto all'after-party
//!
//! Il confronto è volutamente largo: nome e cognome passano se uno contiene
//! l'altro, così "Sarah" trova "Big Sarah" e viceversa. Nomi corti come "Al"
//! possono quindi colpire più voci; un falso positivo costa un invito in più,
//! un falso negativo un invito perso. Non trasformarlo in un match esatto senza
//! conferma da parte degli sposi.

use crate::entities::Invitee;

/// Lista invitati all'after-party, compilata nel binario
pub const AFTER_PARTY_ROSTER: &[Invitee] = &[
    Invitee::new("Dakota", "McAfee"),
    Invitee::new("Shae", "Green"),
    Invitee::new("Cole", "Green"),
    Invitee::new("Justin", "Mcgee"),
    Invitee::new("Curt", "Mandel"),
    Invitee::new("Bri", "Murphy"),
    Invitee::new("Anna", "Mandel"),
    Invitee::new("Jennifer", "Kazer"),
    Invitee::new("Jeffrey", "Kazer"),
    Invitee::new("Tyler", "Davis"),
    Invitee::new("Candice", "Littleton"),
    Invitee::new("Taylor", "Hall"),
    Invitee::new("Marisa", "Griffis"),
    Invitee::new("Logan", "Russel"),
    Invitee::new("Aaron", "Tipton"),
    Invitee::new("Caleb", "Horn"),
    Invitee::new("Big Sarah", "Roberts"),
    Invitee::new("Gavin", "Powers"),
    Invitee::new("Destiny", "Robbins"),
    Invitee::new("Trey", "Howard"),
    Invitee::new("Althea", "Knapp"),
    Invitee::new("Elyssa", "Perkins"),
    Invitee::new("Robyn", "Southam"),
    Invitee::new("Brady", "Milward"),
    Invitee::new("Terry", "Jones"),
    Invitee::new("Michael", "Whaley"),
    Invitee::new("Brandon", "Blair"),
    Invitee::new("Andrew", "Hendrickson"),
    Invitee::new("Kayci", "Austin"),
    Invitee::new("Drew", "Brown"),
];

/// Whether a guest fuzzily matches an entry of [`AFTER_PARTY_ROSTER`].
pub fn is_invited(first_name: &str, last_name: &str) -> bool {
    is_invited_in(AFTER_PARTY_ROSTER, first_name, last_name)
}

/// Same as [`is_invited`] against an explicit roster.
///
/// A blank first name never matches. A blank last name only matches entries
/// whose own last name is blank.
pub fn is_invited_in(roster: &[Invitee], first_name: &str, last_name: &str) -> bool {
    let first = first_name.trim().to_lowercase();
    let last = last_name.trim().to_lowercase();

    if first.is_empty() {
        return false;
    }

    roster.iter().any(|invitee| {
        let inv_first = invitee.first_name.trim().to_lowercase();
        let inv_last = invitee.last_name.trim().to_lowercase();

        let first_match = loosely_equal(&first, &inv_first);
        let last_match = inv_last.is_empty() || (!last.is_empty() && loosely_equal(&last, &inv_last));

        first_match && last_match
    })
}

fn loosely_equal(candidate: &str, listed: &str) -> bool {
    candidate == listed || candidate.contains(listed) || listed.contains(candidate)
}
