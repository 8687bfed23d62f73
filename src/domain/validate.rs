// ============================================================
// Layer 3 — Field Validation
// ============================================================
// Declared range constraints for every numeric field, checked
// before a record ever reaches the encoder.
//
// The limits are the same ones the form widgets advertise, but
// they live here so the encoder's precondition (a valid record)
// holds no matter which surface produced it — web form, command
// line, or a test.
//
// The constants are public so the page renderer can stamp the
// identical min/max onto the HTML inputs: one source of truth
// for both enforcement and presentation.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::Result;

use crate::domain::record::StudentRecord;

pub const AGE_MIN: u32 = 18;
pub const AGE_MAX: u32 = 100;

pub const STUDY_HOURS_MIN: u32 = 1;
pub const STUDY_HOURS_MAX: u32 = 168;

pub const SLEEP_HOURS_MIN: u32 = 4;
pub const SLEEP_HOURS_MAX: u32 = 12;

pub const EXERCISE_FREQ_MIN: u32 = 0;
pub const EXERCISE_FREQ_MAX: u32 = 7;

pub const SOCIAL_MEDIA_MIN: u32 = 0;
pub const SOCIAL_MEDIA_MAX: u32 = 10;

pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

/// Shared 1–5 scale for family support, social support and
/// financial stress.
pub const SCALE_MIN: u32 = 1;
pub const SCALE_MAX: u32 = 5;

/// Check every numeric field of a record against its declared range.
///
/// The categorical fields need no check here — their enums are
/// closed, so an out-of-vocabulary value cannot be constructed.
pub fn validate(record: &StudentRecord) -> Result<()> {
    check_range("Age", record.age, AGE_MIN, AGE_MAX)?;
    check_range("Study Hours per Week", record.study_hours, STUDY_HOURS_MIN, STUDY_HOURS_MAX)?;
    check_range("Sleep Hours per Night", record.sleep_hours, SLEEP_HOURS_MIN, SLEEP_HOURS_MAX)?;
    check_range("Exercise Frequency", record.exercise_freq, EXERCISE_FREQ_MIN, EXERCISE_FREQ_MAX)?;
    check_range("Social Media Use", record.social_media, SOCIAL_MEDIA_MIN, SOCIAL_MEDIA_MAX)?;
    check_range("Family Support", record.family_support, SCALE_MIN, SCALE_MAX)?;
    check_range("Social Support", record.social_support, SCALE_MIN, SCALE_MAX)?;
    check_range("Financial Stress", record.financial_stress, SCALE_MIN, SCALE_MAX)?;

    if !(GPA_MIN..=GPA_MAX).contains(&record.gpa) {
        anyhow::bail!(
            "GPA must be between {:.1} and {:.1} (got {})",
            GPA_MIN, GPA_MAX, record.gpa
        );
    }

    Ok(())
}

/// Reject a value outside [min, max] with a message naming the field.
fn check_range(field: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        anyhow::bail!("{field} must be between {min} and {max} (got {value})");
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_valid() {
        assert!(validate(&StudentRecord::default()).is_ok());
    }

    #[test]
    fn test_age_below_minimum_is_rejected() {
        let record = StudentRecord { age: 17, ..StudentRecord::default() };
        let err = validate(&record).unwrap_err();
        // The message must name the offending field and its range
        assert!(err.to_string().contains("Age"));
        assert!(err.to_string().contains("18"));
    }

    #[test]
    fn test_sleep_above_maximum_is_rejected() {
        let record = StudentRecord { sleep_hours: 13, ..StudentRecord::default() };
        assert!(validate(&record).is_err());
    }

    #[test]
    fn test_gpa_out_of_scale_is_rejected() {
        let record = StudentRecord { gpa: 4.5, ..StudentRecord::default() };
        let err = validate(&record).unwrap_err();
        assert!(err.to_string().contains("GPA"));
    }

    #[test]
    fn test_boundary_values_pass() {
        let record = StudentRecord {
            age:              AGE_MAX,
            study_hours:      STUDY_HOURS_MAX,
            sleep_hours:      SLEEP_HOURS_MIN,
            exercise_freq:    EXERCISE_FREQ_MIN,
            social_media:     SOCIAL_MEDIA_MAX,
            gpa:              GPA_MAX,
            family_support:   SCALE_MIN,
            social_support:   SCALE_MAX,
            financial_stress: SCALE_MAX,
            ..StudentRecord::default()
        };
        assert!(validate(&record).is_ok());
    }
}
