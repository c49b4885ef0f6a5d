//! Validation rules for form fields

/// What is wrong with a value. The frontend turns it into a localized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    Required,
    InvalidPhone,
    NotInteger,
    NotNumber,
    TooLong(usize),
    BelowMin,
}

/// Value format a field expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    #[default]
    Any,
    Phone,
    Integer,
    Decimal,
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub format: ValueFormat,
    pub min: Option<f64>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            format: ValueFormat::Any,
            min: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_format(self, format: ValueFormat) -> Self {
        Self { format, ..self }
    }

    pub const fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    /// Validate a raw input value. Empty optional values are always valid.
    pub fn validate(&self, value: &str) -> Result<(), ValidationIssue> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(ValidationIssue::Required)
            } else {
                Ok(())
            };
        }

        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return Err(ValidationIssue::TooLong(max));
            }
        }

        let number = match self.format {
            ValueFormat::Any => None,
            ValueFormat::Phone => {
                if !is_valid_phone(trimmed) {
                    return Err(ValidationIssue::InvalidPhone);
                }
                None
            }
            ValueFormat::Integer => Some(
                trimmed
                    .parse::<i64>()
                    .map_err(|_| ValidationIssue::NotInteger)? as f64,
            ),
            ValueFormat::Decimal => Some(parse_decimal(trimmed).ok_or(ValidationIssue::NotNumber)?),
        };

        if let (Some(min), Some(number)) = (self.min, number) {
            if number < min {
                return Err(ValidationIssue::BelowMin);
            }
        }

        Ok(())
    }
}

/// Accepts `,` as the decimal separator as users type it
pub fn parse_decimal(value: &str) -> Option<f64> {
    let normalized: String = value
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Optional leading `+`, then 7 to 15 digits. Spaces, dashes and parentheses
/// are allowed as separators.
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    let body = value.strip_prefix('+').unwrap_or(value);
    let mut digits = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return false,
        }
    }
    (7..=15).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rules = ValidationRules::required();
        assert_eq!(rules.validate("   "), Err(ValidationIssue::Required));
        assert_eq!(rules.validate("x"), Ok(()));
        assert_eq!(ValidationRules::none().validate(""), Ok(()));
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("+998 (90) 123-45-67"));
        assert!(is_valid_phone("1234567"));
        assert!(!is_valid_phone("+99890abc"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("++998901234567"));

        let rules = ValidationRules::required().with_format(ValueFormat::Phone);
        assert_eq!(rules.validate("12"), Err(ValidationIssue::InvalidPhone));
    }

    #[test]
    fn test_numbers() {
        let decimal = ValidationRules::required()
            .with_format(ValueFormat::Decimal)
            .with_min(0.0);
        assert_eq!(decimal.validate("12,5"), Ok(()));
        assert_eq!(decimal.validate("-1"), Err(ValidationIssue::BelowMin));
        assert_eq!(decimal.validate("abc"), Err(ValidationIssue::NotNumber));

        let integer = ValidationRules::none().with_format(ValueFormat::Integer);
        assert_eq!(integer.validate("1.5"), Err(ValidationIssue::NotInteger));
        assert_eq!(integer.validate(""), Ok(()));
    }

    #[test]
    fn test_length() {
        let rules = ValidationRules::required().with_max_length(3);
        assert_eq!(rules.validate("abcd"), Err(ValidationIssue::TooLong(3)));
    }
}
