// ABOUTME: Deterministic HTML assembly for plan documents: summary, meals, totals, notes sections
// ABOUTME: Same plan and client always produce the same markup; only the footer carries a timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! HTML rendition of a plan document.
//!
//! This markup is both the input to the PDF renderer and, on the fallback
//! path, the artifact itself. Assembly is deterministic for a given plan and
//! client; the caller supplies the footer timestamp so exports are
//! reproducible in tests.

use crate::errors::{AppError, AppResult};
use crate::models::plan::PlanDocument;
use crate::models::profile::ClientProfile;
use chrono::{DateTime, Utc};
use html_escape::encode_text;

const STYLE: &str = "\
body{font-family:Helvetica,Arial,sans-serif;margin:40px;color:#1a1a1a}\
h1{border-bottom:2px solid #2a7d4f;padding-bottom:8px}\
h2{color:#2a7d4f;margin-top:28px}\
table{border-collapse:collapse;width:100%;margin:12px 0}\
th,td{border:1px solid #ccc;padding:6px 10px;text-align:left}\
th{background:#f0f5f2}\
.meta{color:#555;font-size:0.9em}\
.meal{margin:16px 0;padding:12px;border:1px solid #ddd;border-radius:4px}\
.meal h3{margin:0 0 6px 0}\
footer{margin-top:36px;color:#888;font-size:0.8em;border-top:1px solid #ddd;padding-top:8px}";

/// Assemble the full HTML representation of a plan document.
///
/// # Errors
///
/// Fails only when the document is missing required fields (an unnamed plan
/// cannot be titled). This is the sole hard-failure source in the export
/// path: everything downstream has a fallback.
pub fn render_plan_html(
    plan: &PlanDocument,
    client: &ClientProfile,
    generated_at: DateTime<Utc>,
) -> AppResult<String> {
    if plan.name.trim().is_empty() {
        return Err(AppError::export_failed(
            "plan document is missing a name and cannot be rendered",
        ));
    }

    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>");
    html.push_str(&encode_text(&plan.name));
    html.push_str("</title><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>");

    html.push_str(&format!("<h1>{}</h1>", encode_text(&plan.name)));
    push_client_block(&mut html, client);
    push_summary_block(&mut html, plan);
    push_meals(&mut html, plan);
    push_totals_table(&mut html, plan);
    push_optional_section(&mut html, "Dietary Restrictions", plan.restrictions.as_deref());
    push_optional_section(&mut html, "Supplements", plan.supplements.as_deref());
    push_optional_section(&mut html, "Hydration", plan.hydration_notes.as_deref());

    html.push_str(&format!(
        "<footer>Generated {} &middot; {}</footer>",
        generated_at.format("%Y-%m-%d %H:%M UTC"),
        encode_text(&plan.name),
    ));
    html.push_str("</body></html>");
    Ok(html)
}

fn push_client_block(html: &mut String, client: &ClientProfile) {
    html.push_str("<h2>Client</h2><p class=\"meta\">");
    html.push_str(&format!(
        "{} &middot; {} years &middot; {:.1} kg &middot; {:.0} cm &middot; {}",
        encode_text(&client.full_name),
        client.age_years,
        client.weight_kg,
        client.height_cm,
        client.activity_level.as_str().replace('_', " "),
    ));
    html.push_str("</p>");
}

fn push_summary_block(html: &mut String, plan: &PlanDocument) {
    let targets = plan.macro_targets;
    let protein_kcal = f64::from(targets.protein_g) * 4.0;
    let carbs_kcal = f64::from(targets.carbs_g) * 4.0;
    let fat_kcal = f64::from(targets.fat_g) * 9.0;
    let total_kcal = protein_kcal + carbs_kcal + fat_kcal;
    let percent = |kcal: f64| -> i64 {
        if total_kcal > 0.0 {
            (kcal / total_kcal * 100.0).round() as i64
        } else {
            0
        }
    };

    html.push_str("<h2>Nutrition Summary</h2>");
    html.push_str(&format!(
        "<table><tr><th>Daily Calories</th><th>Protein</th><th>Carbs</th><th>Fat</th></tr>\
         <tr><td>{:.0} kcal</td><td>{} g ({}%)</td><td>{} g ({}%)</td><td>{} g ({}%)</td></tr></table>",
        plan.daily_calories,
        targets.protein_g,
        percent(protein_kcal),
        targets.carbs_g,
        percent(carbs_kcal),
        targets.fat_g,
        percent(fat_kcal),
    ));
}

fn push_meals(html: &mut String, plan: &PlanDocument) {
    if plan.meals.is_empty() {
        return;
    }
    html.push_str("<h2>Meals</h2>");
    for meal in &plan.meals {
        html.push_str("<div class=\"meal\">");
        html.push_str(&format!(
            "<h3>{}: {}</h3>",
            meal.meal_type.label(),
            encode_text(&meal.name),
        ));
        if let Some(description) = &meal.description {
            html.push_str(&format!("<p>{}</p>", encode_text(description)));
        }
        html.push_str(&format!(
            "<p class=\"meta\">{:.0} kcal &middot; P {:.0} g &middot; C {:.0} g &middot; F {:.0} g</p>",
            meal.calories, meal.protein_g, meal.carbs_g, meal.fat_g,
        ));
        if let Some(ingredients) = &meal.ingredients {
            html.push_str(&format!(
                "<p><strong>Ingredients:</strong> {}</p>",
                encode_text(ingredients)
            ));
        }
        if let Some(instructions) = &meal.instructions {
            html.push_str(&format!(
                "<p><strong>Instructions:</strong> {}</p>",
                encode_text(instructions)
            ));
        }
        html.push_str("</div>");
    }
}

fn push_totals_table(html: &mut String, plan: &PlanDocument) {
    let totals = plan.daily_totals();
    html.push_str("<h2>Daily Totals</h2>");
    html.push_str(&format!(
        "<table><tr><th>Calories</th><th>Protein</th><th>Carbs</th><th>Fat</th></tr>\
         <tr><td>{:.0} kcal</td><td>{:.0} g</td><td>{:.0} g</td><td>{:.0} g</td></tr></table>",
        totals.calories, totals.protein_g, totals.carbs_g, totals.fat_g,
    ));
}

fn push_optional_section(html: &mut String, title: &str, body: Option<&str>) {
    if let Some(body) = body {
        if !body.trim().is_empty() {
            html.push_str(&format!(
                "<h2>{title}</h2><p>{}</p>",
                encode_text(body)
            ));
        }
    }
}
