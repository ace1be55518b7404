//! Result panel and prediction display helpers

use colored::Colorize;
use serde::Serialize;

use crate::data::{round_of, season_kind, RACES};
use crate::form::{FormController, RequestStatus};
use crate::models::PredictionResult;

/// Championship points for P1..P10
pub const POINTS_BY_POSITION: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

/// Position shown when the service omits one in a comparison
const FALLBACK_POSITION: u8 = 20;

/// How close a prediction came to the recorded result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accuracy {
    Exact,
    Close,
    OffTarget,
}

impl Accuracy {
    pub fn label(self) -> &'static str {
        match self {
            Accuracy::Exact => "🎯 Exact Match!",
            Accuracy::Close => "🟡 Close!",
            Accuracy::OffTarget => "🔴 Off target",
        }
    }
}

/// Classify by absolute position difference: 0 exact, up to 2 close
pub fn classify_accuracy(predicted: u8, actual: u8) -> Accuracy {
    match predicted.abs_diff(actual) {
        0 => Accuracy::Exact,
        1..=2 => Accuracy::Close,
        _ => Accuracy::OffTarget,
    }
}

/// Predicted against actual position for a historical season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub predicted: u8,
    pub actual: u8,
    pub difference: u8,
    pub accuracy: Accuracy,
}

/// Compare a result with its attached historical outcome, if any
pub fn compare(result: &PredictionResult) -> Option<Comparison> {
    let actual = result.historical()?.position?;
    let predicted = if result.predicted_position == 0 {
        FALLBACK_POSITION
    } else {
        result.predicted_position
    };

    Some(Comparison {
        predicted,
        actual,
        difference: predicted.abs_diff(actual),
        accuracy: classify_accuracy(predicted, actual),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::VeryHigh => "🟢 Very High (80%+)",
            ConfidenceLevel::High => "🟡 High (60-80%)",
            ConfidenceLevel::Medium => "🟠 Medium (40-60%)",
            ConfidenceLevel::Low => "🔴 Low (<40%)",
        }
    }
}

pub fn confidence_level(confidence: f64) -> ConfidenceLevel {
    let pct = confidence * 100.0;
    if pct >= 80.0 {
        ConfidenceLevel::VeryHigh
    } else if pct >= 60.0 {
        ConfidenceLevel::High
    } else if pct >= 40.0 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

pub fn format_position(position: u8) -> String {
    format!("P{}", position)
}

/// Confidence as a percentage with one decimal, e.g. `0.82` -> `82.0%`
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

pub fn points_for_position(position: u8) -> u32 {
    match position {
        1..=10 => POINTS_BY_POSITION[position as usize - 1],
        _ => 0,
    }
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

fn plural(n: u8) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Full result panel for the form's current prediction
pub fn result_panel(form: &FormController) -> Option<String> {
    let result = form.prediction()?;
    let mut out = Vec::new();
    let rule = "-".repeat(60);

    out.push(format!("{}", "🏁 Position Prediction".yellow().bold()));
    out.push(rule.clone());
    out.push(format!(
        "{} {}    {} {}",
        "🎯 Predicted Position:".bold(),
        format_position(result.predicted_position).cyan().bold(),
        format_confidence(result.prediction_confidence).green().bold(),
        "Confidence"
    ));
    out.push(format!(
        "Confidence Level: {}",
        confidence_level(result.prediction_confidence).label()
    ));
    out.push(String::new());

    if let Some(driver) = form.driver() {
        out.push(format!("{}", "👨‍🏎️ Driver Analysis".yellow().bold()));
        out.push(format!("  {} {} #{}", driver.flag, driver.name, driver.number));
        out.push(format!("  Team: {}", driver.team));
        out.push(format!(
            "  Experience: {} years",
            form.effective_experience().unwrap_or(driver.experience)
        ));
        if let Some(season) = form.season() {
            out.push(format!("  Season: {}", season));
        }
        out.push(String::new());
    }

    if let Some(race) = form.race() {
        out.push(format!("{}", "🏁 Circuit Analysis".yellow().bold()));
        out.push(format!("  {}", race.name.bold()));
        out.push(format!("  {}", race.circuit));
        if let Some(round) = round_of(race.name) {
            out.push(format!("  Round: {} of {}", round, RACES.len()));
        }
        out.push(format!("  Total Laps: {}", race.laps));
        out.push(format!("  Country: {}", race.flag));
        out.push(String::new());
    }

    if result.is_historical {
        if let Some(history) = result.historical_result.as_ref() {
            out.push(format!("{}", "📊 Historical Result".yellow().bold()));
            out.push(format!(
                "  Actual Position: {}",
                history
                    .position
                    .map(format_position)
                    .unwrap_or_else(|| "N/A".to_string())
            ));
            out.push(format!(
                "  Actual Points: {}",
                or_na(history.points.map(|p| format!("{:.2}", p)))
            ));
            out.push(format!("  Driver: {}", or_na(history.driver.as_deref())));
            out.push(format!("  Team: {}", or_na(history.team.as_deref())));

            if let Some(cmp) = compare(result) {
                let label = match cmp.accuracy {
                    Accuracy::Exact => cmp.accuracy.label().green().bold(),
                    Accuracy::Close => cmp.accuracy.label().yellow().bold(),
                    Accuracy::OffTarget => cmp.accuracy.label().red().bold(),
                };
                out.push(String::new());
                out.push(format!("  {}", "⚡ Position Accuracy".bold()));
                out.push(format!("  Predicted: {}", format_position(cmp.predicted)));
                out.push(format!("  Actual: {}", format_position(cmp.actual)));
                out.push(format!(
                    "  Difference: {} position{}",
                    cmp.difference,
                    plural(cmp.difference)
                ));
                out.push(format!("  Accuracy: {}", label));
            }
        }
    } else {
        out.push(format!("{}", "🔮 Future Prediction".green().bold()));
        out.push(
            "  This is a prediction for a future season. Historical data not available for comparison."
                .to_string(),
        );
    }
    out.push(String::new());
    out.push(points_table());

    Some(out.join("\n"))
}

/// F1 points by position reference
pub fn points_table() -> String {
    let top: Vec<String> = POINTS_BY_POSITION
        .iter()
        .enumerate()
        .map(|(i, pts)| format!("P{}: {} pt{}", i + 1, pts, if *pts == 1 { "" } else { "s" }))
        .collect();

    format!(
        "{}\n  {}\n  {}\n  P11-P20: 0 points",
        "🏆 F1 Points by Position:".bold(),
        top[..5].join(" | "),
        top[5..].join(" | ")
    )
}

/// Everything shown in the results area for the current form status
pub fn status_panel(form: &FormController) -> String {
    match form.status() {
        RequestStatus::Idle => {
            let hint = match form.season().and_then(season_kind) {
                Some(kind) => format!(
                    "Season {} ({})",
                    form.season().unwrap_or_default(),
                    kind.label()
                ),
                None => "Follow the steps to get your race prediction!".to_string(),
            };
            format!(
                "Advanced AI-powered F1 position prediction system.\n{}",
                hint
            )
        }
        RequestStatus::Loading => format!(
            "{}\nAI is processing your prediction...",
            "Analyzing Race Data".cyan().bold()
        ),
        RequestStatus::Error(message) => format!("{} {}", "Error:".red().bold(), message),
        RequestStatus::Success(_) => result_panel(form).unwrap_or_default(),
    }
}
