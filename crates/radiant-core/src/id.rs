//! Candidate identifiers and particle-id helpers.
//!
//! Particle ids follow the 2012 Monte Carlo nuclear code scheme: nuclei are
//! `±10LZZZAAAI` where `ZZZ` is the charge number and `AAA` the mass number.
//! Anything below `1_000_000_000` in magnitude is a PDG code (electrons,
//! photons, neutrinos, the proton `2212` and neutron `2112`).

use std::fmt;

/// Identifies a candidate within one simulation run.
///
/// Assigned sequentially by the simulation driver when a candidate enters
/// the active set. Candidates built outside a run carry `CandidateId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(pub u64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CandidateId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

const NUCLEUS_BASE: i32 = 1_000_000_000;

/// PDG code of the photon.
pub const PHOTON: i32 = 22;
/// PDG code of the electron (the positron is `-ELECTRON`).
pub const ELECTRON: i32 = 11;
/// PDG code of the proton when not written in the nucleus scheme.
pub const PROTON: i32 = 2212;
/// PDG code of the neutron when not written in the nucleus scheme.
pub const NEUTRON: i32 = 2112;

/// Build the nucleus id for mass number `a` and charge number `z`.
///
/// # Panics
///
/// Panics if `z > a`, `a < 0`, `z < 0`, or `a > 999`; these are
/// programming errors rather than runtime conditions.
pub fn nucleus_id(a: i32, z: i32) -> i32 {
    assert!((0..=999).contains(&a), "nucleus_id: mass number {a} out of range");
    assert!(
        (0..=a).contains(&z),
        "nucleus_id: charge number {z} out of range for A={a}"
    );
    NUCLEUS_BASE + z * 10_000 + a * 10
}

/// Whether `id` is written in the nucleus scheme.
pub fn is_nucleus(id: i32) -> bool {
    id.abs() >= NUCLEUS_BASE
}

/// Charge number of a nucleus id (signed for anti-nuclei); 0 otherwise.
pub fn charge_number(id: i32) -> i32 {
    if !is_nucleus(id) {
        return 0;
    }
    let z = (id.abs() / 10_000) % 1000;
    id.signum() * z
}

/// Mass number of a nucleus id; 0 otherwise.
pub fn mass_number(id: i32) -> i32 {
    if !is_nucleus(id) {
        return 0;
    }
    (id.abs() / 10) % 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proton_and_iron_round_trip() {
        let p = nucleus_id(1, 1);
        assert_eq!(p, 1_000_010_010);
        assert_eq!(charge_number(p), 1);
        assert_eq!(mass_number(p), 1);

        let fe = nucleus_id(56, 26);
        assert!(is_nucleus(fe));
        assert_eq!(charge_number(fe), 26);
        assert_eq!(mass_number(fe), 56);
    }

    #[test]
    fn neutron_has_no_charge() {
        let n = nucleus_id(1, 0);
        assert_eq!(charge_number(n), 0);
        assert_eq!(mass_number(n), 1);
    }

    #[test]
    fn anti_nucleus_has_negative_charge() {
        let anti_he = -nucleus_id(4, 2);
        assert_eq!(charge_number(anti_he), -2);
        assert_eq!(mass_number(anti_he), 4);
    }

    #[test]
    fn pdg_codes_are_not_nuclei() {
        for id in [PHOTON, ELECTRON, -ELECTRON, PROTON, NEUTRON, 12, -14] {
            assert!(!is_nucleus(id));
            assert_eq!(charge_number(id), 0);
            assert_eq!(mass_number(id), 0);
        }
    }

    #[test]
    #[should_panic]
    fn charge_above_mass_panics() {
        let _ = nucleus_id(1, 2);
    }

    #[test]
    fn candidate_id_display() {
        assert_eq!(CandidateId(17).to_string(), "17");
        assert_eq!(CandidateId::from(3), CandidateId(3));
    }
}
