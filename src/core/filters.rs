use crate::models::{Direction, Resident, WishDirection, WishFloor};

/// Check whether `other_floor` is where a resident on `own_floor` wants to go
#[inline]
pub fn floor_satisfies(wish: WishFloor, own_floor: i32, other_floor: i32) -> bool {
    match wish {
        WishFloor::Higher => other_floor > own_floor,
        WishFloor::Lower => other_floor < own_floor,
        WishFloor::Any => true,
    }
}

/// Check whether an apartment facing `other` fits the direction wish
#[inline]
pub fn direction_satisfies(wish: WishDirection, other: Direction) -> bool {
    match wish {
        WishDirection::Any => true,
        WishDirection::Toward(wanted) => wanted == other,
    }
}

/// Outcome of the four eligibility rules for one (subject, candidate) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    /// Candidate's floor fits the subject's floor wish
    pub floor_ok: bool,
    /// Candidate's direction fits the subject's direction wish
    pub direction_ok: bool,
    /// Subject's floor fits the candidate's floor wish
    pub reverse_floor_ok: bool,
    /// Subject's direction fits the candidate's direction wish
    pub reverse_direction_ok: bool,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        self.floor_ok && self.direction_ok && self.reverse_floor_ok && self.reverse_direction_ok
    }
}

/// Evaluate both directions of the exchange
pub fn check_eligibility(subject: &Resident, candidate: &Resident) -> Eligibility {
    Eligibility {
        floor_ok: floor_satisfies(subject.wish_floor, subject.floor, candidate.floor),
        direction_ok: direction_satisfies(subject.wish_direction, candidate.direction),
        reverse_floor_ok: floor_satisfies(candidate.wish_floor, candidate.floor, subject.floor),
        reverse_direction_ok: direction_satisfies(candidate.wish_direction, subject.direction),
    }
}

/// Both residents would accept each other's apartment
///
/// Symmetric: `is_mutually_eligible(a, b) == is_mutually_eligible(b, a)`.
#[inline]
pub fn is_mutually_eligible(subject: &Resident, candidate: &Resident) -> bool {
    check_eligibility(subject, candidate).is_eligible()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_resident(
        id: &str,
        floor: i32,
        direction: Direction,
        wish_floor: WishFloor,
        wish_direction: WishDirection,
    ) -> Resident {
        Resident {
            national_id: id.to_string(),
            name: format!("Resident {}", id),
            building: "A".to_string(),
            floor,
            direction,
            phone: String::new(),
            wish_floor,
            wish_direction,
        }
    }

    #[test]
    fn test_floor_wishes() {
        assert!(floor_satisfies(WishFloor::Higher, 3, 5));
        assert!(!floor_satisfies(WishFloor::Higher, 3, 3));
        assert!(!floor_satisfies(WishFloor::Higher, 3, 1));
        assert!(floor_satisfies(WishFloor::Lower, 3, -1));
        assert!(!floor_satisfies(WishFloor::Lower, 3, 3));
        assert!(floor_satisfies(WishFloor::Any, 3, 3));
    }

    #[test]
    fn test_direction_wishes() {
        assert!(direction_satisfies(WishDirection::Any, Direction::West));
        assert!(direction_satisfies(WishDirection::Toward(Direction::East), Direction::East));
        assert!(!direction_satisfies(WishDirection::Toward(Direction::East), Direction::West));
    }

    #[test]
    fn test_mutual_exchange_is_eligible() {
        let subject = create_resident("s", 3, Direction::North, WishFloor::Higher, WishDirection::Any);
        let candidate = create_resident(
            "c",
            5,
            Direction::South,
            WishFloor::Lower,
            WishDirection::Toward(Direction::North),
        );

        let eligibility = check_eligibility(&subject, &candidate);
        assert!(eligibility.is_eligible());
        assert!(is_mutually_eligible(&candidate, &subject));
    }

    #[test]
    fn test_one_sided_wish_is_not_eligible() {
        // Candidate is higher as the subject wants, but also wants to go higher
        let subject = create_resident("s", 3, Direction::North, WishFloor::Higher, WishDirection::Any);
        let candidate = create_resident("c", 5, Direction::South, WishFloor::Higher, WishDirection::Any);

        let eligibility = check_eligibility(&subject, &candidate);
        assert!(eligibility.floor_ok);
        assert!(!eligibility.reverse_floor_ok);
        assert!(!eligibility.is_eligible());
        assert!(!is_mutually_eligible(&candidate, &subject));
    }

    #[test]
    fn test_reverse_direction_checked() {
        let subject = create_resident("s", 2, Direction::East, WishFloor::Any, WishDirection::Any);
        let candidate = create_resident(
            "c",
            2,
            Direction::West,
            WishFloor::Any,
            WishDirection::Toward(Direction::North),
        );

        let eligibility = check_eligibility(&subject, &candidate);
        assert!(eligibility.direction_ok);
        assert!(!eligibility.reverse_direction_ok);
    }
}
