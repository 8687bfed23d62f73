// ============================================================
// Layer 1 — Page Renderer
// ============================================================
// Builds the single HTML page: a two-column form of labeled
// inputs, the predict button, and (after a submission) either
// the result section or the error banner.
//
// The widget min/max attributes come from the same constants
// the validation layer enforces, so the page can never advertise
// a range the server would reject.
//
// This is presentation glue only — no prediction logic here.

use crate::application::predict_use_case::Prediction;
use crate::domain::record::StudentRecord;
use crate::domain::validate::*;

/// What the page shows below the form.
pub enum Outcome {
    /// First visit — form only
    Fresh,
    /// A successful prediction to render
    Predicted(Prediction),
    /// The predict-and-render error boundary caught something
    Failed(String),
}

/// Pastel palette carried over from the original page design.
const STYLE: &str = "
    body {
        background-color: #f0f4f8;
        color: #1e3a5f;
        font-family: sans-serif;
        max-width: 60rem;
        margin: 2rem auto;
        padding: 0 1rem;
    }
    h1, h2, h3 { color: #2980b9; }
    label { font-weight: bold; color: #34495e; display: block; margin-top: 0.8rem; }
    input, select { background-color: #ffffff; color: #2c3e50; padding: 0.3rem; }
    .columns { display: flex; gap: 3rem; }
    .columns > div { flex: 1; }
    button {
        background-color: #3498db;
        color: white;
        font-weight: bold;
        border: none;
        padding: 0.6rem 1.4rem;
        margin-top: 1.2rem;
        cursor: pointer;
    }
    .tips { background-color: #d6eaf8; padding: 0.8rem 1.2rem; margin-top: 1rem; }
    .disclaimer { background-color: #fdebd0; padding: 0.8rem 1.2rem; margin-top: 1rem; }
    .error { background-color: #f5b7b1; padding: 0.8rem 1.2rem; margin-top: 1rem; }
";

/// The static disclaimer shown after every successful prediction.
const DISCLAIMER: &str =
    "The predicted stress level score is based on a machine learning model \
     and is not 100% accurate. This tool is intended for informational \
     purposes only and should not be used as a substitute for professional \
     advice. Please interpret the score as a general indication of potential \
     stress levels rather than an absolute measure. If you are experiencing \
     significant stress or mental health concerns, consider reaching out to \
     a qualified professional.";

/// Render the whole page. The submitted record is echoed back
/// into the form controls so inputs survive the round trip.
pub fn render(record: &StudentRecord, outcome: &Outcome) -> String {
    let outcome_html = match outcome {
        Outcome::Fresh             => String::new(),
        Outcome::Predicted(p)      => result_block(p),
        Outcome::Failed(message)   => error_block(message),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Student Stress Predictor</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         <h1>Student Stress Level Predictor &#128202;</h1>\n\
         <p>This app predicts the stress level based on various inputs.</p>\n\
         {form}\n\
         {outcome_html}\n\
         </body>\n\
         </html>\n",
        form = form(record),
    )
}

/// The two-column input form, mirroring the original layout.
fn form(r: &StudentRecord) -> String {
    let col1 = [
        number_input("Age (18-100)", "age",
            &AGE_MIN.to_string(), &AGE_MAX.to_string(), "1", &r.age.to_string()),
        radio_group("Gender", "gender",
            &["Male", "Female"], r.gender.as_str()),
        select_input("Grade Level", "grade_level",
            &["Freshman", "Sophomore", "Junior", "Senior"], r.grade_level.as_str()),
        number_input("Study Hours per Week (1-168)", "study_hours",
            &STUDY_HOURS_MIN.to_string(), &STUDY_HOURS_MAX.to_string(), "1",
            &r.study_hours.to_string()),
        number_input("Sleep Hours per Night (4-12)", "sleep_hours",
            &SLEEP_HOURS_MIN.to_string(), &SLEEP_HOURS_MAX.to_string(), "1",
            &r.sleep_hours.to_string()),
        number_input("Exercise Frequency (times per week, 0-7)", "exercise_freq",
            &EXERCISE_FREQ_MIN.to_string(), &EXERCISE_FREQ_MAX.to_string(), "1",
            &r.exercise_freq.to_string()),
    ]
    .join("\n");

    let col2 = [
        number_input("Social Media Usage (hours/day, 0-10)", "social_media",
            &SOCIAL_MEDIA_MIN.to_string(), &SOCIAL_MEDIA_MAX.to_string(), "1",
            &r.social_media.to_string()),
        number_input("Academic Performance GPA (0.0-4.0)", "gpa",
            &format!("{GPA_MIN:.1}"), &format!("{GPA_MAX:.1}"), "0.1",
            &format!("{:.1}", r.gpa)),
        number_input("Family Support (1-5)", "family_support",
            &SCALE_MIN.to_string(), &SCALE_MAX.to_string(), "1",
            &r.family_support.to_string()),
        number_input("Social Support (1-5)", "social_support",
            &SCALE_MIN.to_string(), &SCALE_MAX.to_string(), "1",
            &r.social_support.to_string()),
        radio_group("Do you have a part-time job?", "part_time_job",
            &["Yes", "No"], r.part_time_job.as_str()),
        number_input("Financial Stress (1-5)", "financial_stress",
            &SCALE_MIN.to_string(), &SCALE_MAX.to_string(), "1",
            &r.financial_stress.to_string()),
        radio_group("Do you have mental health issues?", "mental_health",
            &["Yes", "No"], r.mental_health.as_str()),
    ]
    .join("\n");

    format!(
        "<form method=\"post\" action=\"/\">\n\
         <div class=\"columns\">\n\
         <div>\n{col1}\n</div>\n\
         <div>\n{col2}\n</div>\n\
         </div>\n\
         <button type=\"submit\">Predict Stress Level</button>\n\
         </form>"
    )
}

fn number_input(label: &str, name: &str, min: &str, max: &str, step: &str, value: &str) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"number\" id=\"{name}\" name=\"{name}\" \
         min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{value}\" required>"
    )
}

fn radio_group(label: &str, name: &str, options: &[&str], selected: &str) -> String {
    let buttons: String = options
        .iter()
        .map(|option| {
            let checked = if *option == selected { " checked" } else { "" };
            format!(
                "<label style=\"display:inline; font-weight:normal;\">\
                 <input type=\"radio\" name=\"{name}\" value=\"{option}\"{checked}> {option}\
                 </label> "
            )
        })
        .collect();
    format!("<label>{label}</label>\n{buttons}")
}

fn select_input(label: &str, name: &str, options: &[&str], selected: &str) -> String {
    let items: String = options
        .iter()
        .map(|option| {
            let chosen = if *option == selected { " selected" } else { "" };
            format!("<option value=\"{option}\"{chosen}>{option}</option>")
        })
        .collect();
    format!(
        "<label for=\"{name}\">{label}</label>\n\
         <select id=\"{name}\" name=\"{name}\">{items}</select>"
    )
}

/// Score heading, colored interpretation, tips, and disclaimer.
fn result_block(prediction: &Prediction) -> String {
    let tier = prediction.tier;
    let tips: String = tier
        .tips()
        .iter()
        .map(|tip| format!("<li>{tip}</li>"))
        .collect();

    format!(
        "<section>\n\
         <h2>Predicted Stress Level: {score:.2}</h2>\n\
         <h3 style=\"color: {color};\">{interpretation}</h3>\n\
         <div class=\"tips\"><p>{tips_title}</p><ul>{tips}</ul></div>\n\
         <div class=\"disclaimer\"><strong>Disclaimer:</strong> {DISCLAIMER}</div>\n\
         </section>",
        score          = prediction.score,
        color          = tier.color(),
        interpretation = tier.interpretation(),
        tips_title     = tier.tips_title(),
    )
}

/// The single error boundary's user-visible rendering.
fn error_block(message: &str) -> String {
    format!(
        "<section class=\"error\">\n\
         <p>An error occurred during prediction: {}</p>\n\
         <p>Please check if all input fields are filled correctly.</p>\n\
         </section>",
        escape_html(message)
    )
}

/// Minimal escaping for text that flows into the page.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
