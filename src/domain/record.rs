// ============================================================
// Layer 3 — Student Record Domain Type
// ============================================================
// Represents one form submission: every lifestyle and academic
// attribute the model was trained on, in typed form.
//
// A record is created fresh for every prediction and never
// persisted — its lifetime is a single request.
//
// The categorical enums are deliberately closed: the training
// data contained exactly these values, so the type system rules
// out categories the model has never seen.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §6 (Enums)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Gender as recorded in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The label used in the training frame (and in one-hot column names)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male   => "Male",
            Self::Female => "Female",
        }
    }
}

/// The student's year of study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum GradeLevel {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl GradeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Freshman  => "Freshman",
            Self::Sophomore => "Sophomore",
            Self::Junior    => "Junior",
            Self::Senior    => "Senior",
        }
    }
}

/// A Yes/No answer — used for both the part-time job and the
/// mental health questions, which share the same vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No  => "No",
        }
    }
}

/// One student's inputs, exactly as collected from the form
/// (or from the `predict` command line flags).
///
/// Field ranges are NOT enforced by this type — that is the job
/// of `domain::validate`, which every caller runs before encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Age in years
    pub age:              u32,
    pub gender:           Gender,
    pub grade_level:      GradeLevel,
    /// Hours spent studying per week
    pub study_hours:      u32,
    /// Hours of sleep per night
    pub sleep_hours:      u32,
    /// Exercise sessions per week
    pub exercise_freq:    u32,
    /// Social media usage in hours per day
    pub social_media:     u32,
    /// Academic performance on the 0.0–4.0 GPA scale
    pub gpa:              f64,
    /// Perceived family support, 1 (none) to 5 (strong)
    pub family_support:   u32,
    /// Perceived social support, 1 (none) to 5 (strong)
    pub social_support:   u32,
    pub part_time_job:    YesNo,
    /// Financial stress, 1 (none) to 5 (severe)
    pub financial_stress: u32,
    pub mental_health:    YesNo,
}

impl Default for StudentRecord {
    /// The same defaults the form widgets start with.
    fn default() -> Self {
        Self {
            age:              20,
            gender:           Gender::Male,
            grade_level:      GradeLevel::Freshman,
            study_hours:      10,
            sleep_hours:      7,
            exercise_freq:    3,
            social_media:     2,
            gpa:              3.0,
            family_support:   4,
            social_support:   3,
            part_time_job:    YesNo::No,
            financial_stress: 3,
            mental_health:    YesNo::No,
        }
    }
}
