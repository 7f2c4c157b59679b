/// Reported through the age field's native validity, never through
/// [`crate::domain::ValidationResult`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeError {
    #[error("Minimum age requirement is 16 years")]
    TooYoung,
    #[error("Please enter a valid age")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age(u8);

impl Age {
    pub const MIN: i64 = 16;
    pub const MAX: i64 = 99;

    pub fn parse(value: i64) -> Result<Self, AgeError> {
        if value < Self::MIN {
            return Err(AgeError::TooYoung);
        }
        if value > Self::MAX {
            return Err(AgeError::OutOfRange);
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| AgeError::OutOfRange)
    }

    /// The number the age field holds for this input, before any range check:
    /// leading whitespace, an optional sign, then as many digits as there are.
    pub fn read_input(input: &str) -> Option<i64> {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        // Anything too long for an i64 is far outside the accepted range anyway.
        let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
        Some(if negative { -magnitude } else { magnitude })
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}
