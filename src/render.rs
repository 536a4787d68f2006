//! HTML renderer for the password form.
//!
//! Everything is written into a [`std::fmt::Write`] sink. The password value
//! itself is never part of the output.

use std::fmt::Write;

use crate::config::FormConfig;
use crate::error::FormError;
use crate::evaluator::{Evaluation, RequirementResult};

const PAGE_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f8fafc; color: #1e293b; }
        .main-container { max-width: 640px; margin: 3rem auto; padding: 2rem; background: #ffffff; border-radius: 0.75rem; border: 1px solid #e2e8f0; }
        h1 { text-align: center; font-size: 1.875rem; }
        .description { text-align: center; color: #64748b; }
        .password-input { display: block; width: 100%; padding: 0.75rem; border: 1px solid #e2e8f0; border-radius: 0.5rem; }
        .help { display: block; font-size: 0.75rem; color: #64748b; margin-top: 0.25rem; }
        .strength-indicator { height: 0.5rem; background: #e2e8f0; border-radius: 9999px; overflow: hidden; margin: 1.5rem 0 1rem; }
        .strength-bar { height: 100%; transition: width 0.3s ease; }
        .requirement-list { margin: 1rem 0; }
        .requirement-item { display: flex; align-items: center; gap: 0.5rem; padding: 0.25rem 0; }
        .requirement-icon.valid { color: #10b981; }
        .requirement-icon.invalid { color: #ef4444; }
        .result-card { padding: 1rem; border-left: 4px solid; border-radius: 0.5rem; background: #f8fafc; }
        .footer { margin-top: 2rem; font-size: 0.75rem; color: #64748b; text-align: center; }
    </style>
"#;

/// Writes the strength bar, checklist and feedback card.
pub fn render_panel<W: Write>(out: &mut W, evaluation: &Evaluation) -> Result<(), FormError> {
    let tier = evaluation.tier();
    let color = tier.color();

    writeln!(out, r#"        <div class="strength-indicator">"#)?;
    writeln!(
        out,
        r#"            <div class="strength-bar" style="width: {:.2}%; background-color: {color};"></div>"#,
        evaluation.percent()
    )?;
    writeln!(out, "        </div>")?;

    writeln!(out, r#"        <div class="requirement-list">"#)?;
    for result in evaluation.results() {
        render_requirement(out, result)?;
    }
    writeln!(out, "        </div>")?;

    writeln!(
        out,
        r#"        <div class="result-card" style="border-left-color: {color};">"#
    )?;
    writeln!(
        out,
        r#"            <strong style="color: {color};">{}:</strong> {}"#,
        tier.label(),
        tier.message()
    )?;
    writeln!(out, "        </div>")?;
    Ok(())
}

fn render_requirement<W: Write>(out: &mut W, result: &RequirementResult) -> Result<(), FormError> {
    let (icon, class) = if result.satisfied {
        ('✔', "valid")
    } else {
        ('✖', "invalid")
    };
    writeln!(out, r#"            <div class="requirement-item">"#)?;
    writeln!(
        out,
        r#"                <span class="requirement-icon {class}">{icon}</span>"#
    )?;
    writeln!(
        out,
        "                <span>{}</span>",
        html_escape(result.requirement.label())
    )?;
    writeln!(out, "            </div>")?;
    Ok(())
}

/// Writes the password input with its placeholder and help text.
pub fn render_input<W: Write>(out: &mut W, config: &FormConfig) -> Result<(), FormError> {
    writeln!(
        out,
        r#"        <label for="password">{}</label>"#,
        html_escape(&config.input_label)
    )?;
    writeln!(
        out,
        r#"        <input id="password" class="password-input" type="password" placeholder="{}" autocomplete="off">"#,
        html_escape(&config.placeholder)
    )?;
    writeln!(
        out,
        r#"        <small class="help">{}</small>"#,
        html_escape(&config.help_text)
    )?;
    Ok(())
}

pub fn render_footer<W: Write>(out: &mut W, config: &FormConfig) -> Result<(), FormError> {
    writeln!(
        out,
        r#"        <p class="footer">{}</p>"#,
        html_escape(&config.footer)
    )?;
    Ok(())
}

/// Writes the whole page. The panel is omitted when `evaluation` is `None`.
pub fn render_page<W: Write>(
    out: &mut W,
    config: &FormConfig,
    evaluation: Option<&Evaluation>,
) -> Result<(), FormError> {
    out.write_str(PAGE_HEADER)?;
    writeln!(out, "    <title>{}</title>", html_escape(&config.page_title))?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, r#"    <div class="main-container">"#)?;
    writeln!(out, "        <h1>{}</h1>", html_escape(&config.title))?;
    writeln!(
        out,
        r#"        <p class="description">{}</p>"#,
        html_escape(&config.description)
    )?;

    render_input(out, config)?;
    if let Some(evaluation) = evaluation {
        render_panel(out, evaluation)?;
    }
    render_footer(out, config)?;

    writeln!(out, "    </div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
