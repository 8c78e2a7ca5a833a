//! Shared domain types.

/// Gender code accepted by the scoring API.
///
/// Wire representation is the integer 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Unknown,
    Male,
    Female,
}

impl Gender {
    /// Decode the wire representation; anything outside {0, 1, 2} is
    /// rejected.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Gender::Unknown),
            1 => Some(Gender::Male),
            2 => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Gender::Unknown => 0,
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Unknown => "unknown",
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trip() {
        for code in 0..=2 {
            let gender = Gender::from_code(code).expect("code in range");
            assert_eq!(i64::from(gender.code()), code);
        }
    }

    #[test]
    fn test_gender_rejects_out_of_range() {
        assert_eq!(Gender::from_code(-1), None);
        assert_eq!(Gender::from_code(3), None);
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::Unknown.label(), "unknown");
        assert_eq!(Gender::Male.label(), "male");
        assert_eq!(Gender::Female.label(), "female");
    }
}
