// ============================================================
// Layer 4 — Feature Encoder
// ============================================================
// Expands one StudentRecord into the exact numeric vector the
// model was trained on.
//
// The trained schema is an ordered list of column names read
// from the model artifact. The encoding contract is:
//
//   1. Every categorical field appears in the schema as
//      <field>_<value> one-hot indicator columns, with no
//      dropped baseline — all levels were present at training.
//   2. The output vector has exactly one value per schema
//      column, in schema order, on every call.
//   3. A schema column this encoder cannot produce (a category
//      outside the closed input vocabulary, or a column from a
//      wider training frame) encodes as 0.0 — the vector is
//      always full width. The artifact loader warns about such
//      columns once at startup.
//
// Instead of expanding categories dynamically and then
// reindexing with fill, a static table maps each known column
// name to the record field that produces it. Walking the schema
// through that table gives the column-set and column-order
// invariant by construction.
//
// Reference: Rust Book §6 (Pattern Matching)
//            Rust Book §13 (Iterators)

use crate::domain::record::{Gender, GradeLevel, StudentRecord, YesNo};

/// Encode a record against the trained feature schema.
///
/// Pure and deterministic: the same record and schema always
/// produce the same vector, and `result.len() == schema.len()`
/// for any input.
pub fn encode(record: &StudentRecord, schema: &[String]) -> Vec<f64> {
    schema
        .iter()
        .map(|column| column_value(record, column).unwrap_or(0.0))
        .collect()
}

/// True when the encoder has a mapping for this schema column.
/// Used by the artifact loader to surface zero-filled columns.
pub fn is_known_column(column: &str) -> bool {
    column_value(&StudentRecord::default(), column).is_some()
}

/// The static column table: schema column name → value.
///
/// Numeric columns carry the raw field value; one-hot columns
/// carry a 1.0/0.0 indicator. Returns None for columns with no
/// mapping, which encode() turns into a 0.0 fill.
fn column_value(record: &StudentRecord, column: &str) -> Option<f64> {
    let value = match column {
        // ── Numeric columns, training-frame header names ─────────────────────
        "Age"                        => record.age as f64,
        "Study Hours per Week"       => record.study_hours as f64,
        "Sleep Hours per Night"      => record.sleep_hours as f64,
        "Exercise Frequency"         => record.exercise_freq as f64,
        "Social Media Use (hrs/day)" => record.social_media as f64,
        "Academic Performance (GPA)" => record.gpa,
        "Family Support"             => record.family_support as f64,
        "Social Support"             => record.social_support as f64,
        "Financial Stress"           => record.financial_stress as f64,

        // ── Gender one-hot group ─────────────────────────────────────────────
        "Gender_Male"   => indicator(record.gender == Gender::Male),
        "Gender_Female" => indicator(record.gender == Gender::Female),

        // ── Grade Level one-hot group ────────────────────────────────────────
        "Grade Level_Freshman"  => indicator(record.grade_level == GradeLevel::Freshman),
        "Grade Level_Sophomore" => indicator(record.grade_level == GradeLevel::Sophomore),
        "Grade Level_Junior"    => indicator(record.grade_level == GradeLevel::Junior),
        "Grade Level_Senior"    => indicator(record.grade_level == GradeLevel::Senior),

        // ── Part-Time Job one-hot group ──────────────────────────────────────
        "Part-Time Job_Yes" => indicator(record.part_time_job == YesNo::Yes),
        "Part-Time Job_No"  => indicator(record.part_time_job == YesNo::No),

        // ── Mental Health Issues one-hot group ───────────────────────────────
        "Mental Health Issues_Yes" => indicator(record.mental_health == YesNo::Yes),
        "Mental Health Issues_No"  => indicator(record.mental_health == YesNo::No),

        _ => return None,
    };
    Some(value)
}

fn indicator(hit: bool) -> f64 {
    if hit { 1.0 } else { 0.0 }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// The full 19-column schema the reference artifact carries,
    /// in training-frame order.
    fn full_schema() -> Vec<String> {
        [
            "Age",
            "Study Hours per Week",
            "Sleep Hours per Night",
            "Exercise Frequency",
            "Social Media Use (hrs/day)",
            "Academic Performance (GPA)",
            "Family Support",
            "Social Support",
            "Financial Stress",
            "Gender_Female",
            "Gender_Male",
            "Grade Level_Freshman",
            "Grade Level_Junior",
            "Grade Level_Senior",
            "Grade Level_Sophomore",
            "Part-Time Job_No",
            "Part-Time Job_Yes",
            "Mental Health Issues_No",
            "Mental Health Issues_Yes",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_vector_width_always_matches_schema() {
        let record = StudentRecord::default();
        let schema = full_schema();
        assert_eq!(encode(&record, &schema).len(), schema.len());
        assert_eq!(encode(&record, &schema[..4]).len(), 4);
        assert!(encode(&record, &[]).is_empty());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let record = StudentRecord::default();
        let schema = full_schema();
        assert_eq!(encode(&record, &schema), encode(&record, &schema));
    }

    #[test]
    fn test_default_record_against_full_schema() {
        // Scenario: Age=20, Male, Freshman, Study=10, Sleep=7, Exercise=3,
        // Social Media=2, GPA=3.0, Family=4, Social=3, No job, Financial=3,
        // no mental health issues.
        let record = StudentRecord::default();
        let schema = full_schema();
        let vector = encode(&record, &schema);

        // Numeric columns carry the raw values
        assert_eq!(vector[0], 20.0); // Age
        assert_eq!(vector[1], 10.0); // Study Hours per Week
        assert_eq!(vector[2], 7.0);  // Sleep Hours per Night
        assert_eq!(vector[3], 3.0);  // Exercise Frequency
        assert_eq!(vector[4], 2.0);  // Social Media Use (hrs/day)
        assert_eq!(vector[5], 3.0);  // Academic Performance (GPA)
        assert_eq!(vector[6], 4.0);  // Family Support
        assert_eq!(vector[7], 3.0);  // Social Support
        assert_eq!(vector[8], 3.0);  // Financial Stress

        // Exactly one indicator of each one-hot group is set
        let group = |prefix: &str| -> f64 {
            schema.iter().zip(&vector)
                .filter(|(name, _)| name.starts_with(prefix))
                .map(|(_, v)| *v)
                .sum()
        };
        assert_eq!(group("Gender_"), 1.0);
        assert_eq!(group("Grade Level_"), 1.0);
        assert_eq!(group("Part-Time Job_"), 1.0);
        assert_eq!(group("Mental Health Issues_"), 1.0);

        // And it is the right indicator in each group
        let at = |name: &str| vector[schema.iter().position(|c| c == name).unwrap()];
        assert_eq!(at("Gender_Male"), 1.0);
        assert_eq!(at("Gender_Female"), 0.0);
        assert_eq!(at("Grade Level_Freshman"), 1.0);
        assert_eq!(at("Part-Time Job_No"), 1.0);
        assert_eq!(at("Mental Health Issues_No"), 1.0);
    }

    #[test]
    fn test_schema_order_drives_output_order() {
        // The same columns in a different order produce the values
        // in that order — the schema is authoritative.
        let record = StudentRecord::default();
        let reversed: Vec<String> = full_schema().into_iter().rev().collect();
        let vector = encode(&record, &reversed);
        assert_eq!(vector[reversed.len() - 1], 20.0); // Age moved to the end
        assert_eq!(vector[0], 0.0); // Mental Health Issues_Yes now first
    }

    #[test]
    fn test_unseen_schema_column_is_zero_filled() {
        // A schema from a wider training vocabulary (e.g. a grade level
        // this form cannot submit) must still yield a full-width vector.
        let record = StudentRecord::default();
        let mut schema = full_schema();
        schema.push("Grade Level_Graduate".to_string());

        let vector = encode(&record, &schema);
        assert_eq!(vector.len(), schema.len());
        assert_eq!(vector[schema.len() - 1], 0.0);
    }

    #[test]
    fn test_unknown_column_is_not_known() {
        assert!(is_known_column("Age"));
        assert!(is_known_column("Mental Health Issues_Yes"));
        assert!(!is_known_column("Grade Level_Graduate"));
        assert!(!is_known_column("Caffeine Intake"));
    }

    #[test]
    fn test_one_hot_follows_the_record() {
        let record = StudentRecord {
            gender:        Gender::Female,
            grade_level:   GradeLevel::Senior,
            part_time_job: YesNo::Yes,
            mental_health: YesNo::Yes,
            ..StudentRecord::default()
        };
        let schema = full_schema();
        let vector = encode(&record, &schema);
        let at = |name: &str| vector[schema.iter().position(|c| c == name).unwrap()];

        assert_eq!(at("Gender_Female"), 1.0);
        assert_eq!(at("Gender_Male"), 0.0);
        assert_eq!(at("Grade Level_Senior"), 1.0);
        assert_eq!(at("Grade Level_Freshman"), 0.0);
        assert_eq!(at("Part-Time Job_Yes"), 1.0);
        assert_eq!(at("Mental Health Issues_Yes"), 1.0);
    }
}
