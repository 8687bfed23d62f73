// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `serve` and `predict`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → u32, f64, enums)
//
// The predict flag defaults mirror the form widget defaults, so
// running `predict` with no flags scores the same record the
// page first shows.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::domain::record::{Gender, GradeLevel, StudentRecord, YesNo};
use crate::web::ServeConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the prediction form as a single web page
    Serve(ServeArgs),

    /// Predict once from command line flags, without a browser
    Predict(PredictArgs),
}

/// All arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to the trained model artifact
    #[arg(long, default_value = "model/stress_model.json")]
    pub model_path: String,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

/// This is the boundary between Layer 1 and the web layer —
/// the server never sees clap types.
impl From<&ServeArgs> for ServeConfig {
    fn from(a: &ServeArgs) -> Self {
        ServeConfig {
            host: a.host.clone(),
            port: a.port,
        }
    }
}

/// All arguments for the `predict` command — one flag per form field.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Path to the trained model artifact
    #[arg(long, default_value = "model/stress_model.json")]
    pub model_path: String,

    /// Age in years (18-100)
    #[arg(long, default_value_t = 20)]
    pub age: u32,

    /// Gender
    #[arg(long, value_enum, default_value = "male")]
    pub gender: Gender,

    /// Grade level
    #[arg(long, value_enum, default_value = "freshman")]
    pub grade_level: GradeLevel,

    /// Study hours per week (1-168)
    #[arg(long, default_value_t = 10)]
    pub study_hours: u32,

    /// Sleep hours per night (4-12)
    #[arg(long, default_value_t = 7)]
    pub sleep_hours: u32,

    /// Exercise sessions per week (0-7)
    #[arg(long, default_value_t = 3)]
    pub exercise_freq: u32,

    /// Social media usage in hours per day (0-10)
    #[arg(long, default_value_t = 2)]
    pub social_media: u32,

    /// Academic performance GPA (0.0-4.0)
    #[arg(long, default_value_t = 3.0)]
    pub gpa: f64,

    /// Family support on a 1-5 scale
    #[arg(long, default_value_t = 4)]
    pub family_support: u32,

    /// Social support on a 1-5 scale
    #[arg(long, default_value_t = 3)]
    pub social_support: u32,

    /// Do you have a part-time job?
    #[arg(long, value_enum, default_value = "no")]
    pub part_time_job: YesNo,

    /// Financial stress on a 1-5 scale
    #[arg(long, default_value_t = 3)]
    pub financial_stress: u32,

    /// Do you have mental health issues?
    #[arg(long, value_enum, default_value = "no")]
    pub mental_health: YesNo,
}

/// Convert CLI flags into the domain record the use case scores.
impl From<&PredictArgs> for StudentRecord {
    fn from(a: &PredictArgs) -> Self {
        StudentRecord {
            age:              a.age,
            gender:           a.gender,
            grade_level:      a.grade_level,
            study_hours:      a.study_hours,
            sleep_hours:      a.sleep_hours,
            exercise_freq:    a.exercise_freq,
            social_media:     a.social_media,
            gpa:              a.gpa,
            family_support:   a.family_support,
            social_support:   a.social_support,
            part_time_job:    a.part_time_job,
            financial_stress: a.financial_stress,
            mental_health:    a.mental_health,
        }
    }
}
