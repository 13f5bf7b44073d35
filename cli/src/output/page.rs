//! Page-to-lines rendering
//!
//! Pages come out as plain `String` lines, colored with ANSI truecolor
//! escapes where the UI would draw gradients. The `colored` crate drops the
//! escapes on its own when stdout is not a terminal, so piped output stays
//! clean text.

use colored::Colorize;
use refibe_core::content::{
    self, Cta, Landing, PageContent, PageView, Section, SectionBody, Stat,
};
use refibe_core::routes::{Route, RouteMatch};
use refibe_core::theme::{Palette, Rgb, Theme};

use crate::interactive::text_utils::wrap_text;

/// Render the matched route as printable lines. Unmatched routes render
/// nothing, like the UI outlet.
pub fn page_lines(matched: &RouteMatch, width: usize) -> Vec<String> {
    match matched {
        RouteMatch::NotFound => Vec::new(),
        RouteMatch::Page(route) => match content::view_of(*route) {
            PageView::Landing(landing) => landing_lines(landing, width),
            PageView::Detail(page) => detail_lines(page, width),
        },
    }
}

fn landing_lines(landing: &Landing, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    // Hero: title, tagline, CTAs, then the stat cards.
    lines.push(gradient_line(Route::Home.title(), Palette::Hero));
    lines.push(gradient_line(landing.hero.tagline, Palette::Hero));
    lines.push(cta_line(landing.hero.ctas, Palette::Hero));
    for (i, stat) in landing.hero.stats.iter().enumerate() {
        lines.push(stat_line(stat, Palette::rotating(i)));
    }

    for row in landing.rows {
        lines.push(String::new());
        lines.push(eyebrow_line(row.eyebrow));
        lines.push(gradient_line(row.title, row.palette));
        push_wrapped(&mut lines, row.intro, width, "");
        lines.push(cta_line(std::slice::from_ref(&row.cta), row.palette));
    }

    lines.push(String::new());
    lines.push(eyebrow_line(landing.impact.eyebrow));
    lines.push(gradient_line(landing.impact.heading, Palette::Impact));
    for paragraph in landing.impact.paragraphs {
        push_wrapped(&mut lines, paragraph, width, "");
    }
    for (i, stat) in landing.impact.stats.iter().enumerate() {
        lines.push(stat_line(stat, Palette::rotating(i)));
    }

    lines.push(String::new());
    lines.push(gradient_line("Frequently Asked Questions", Palette::EWaste));
    for (i, entry) in landing.faq.iter().enumerate() {
        lines.push(gradient_line(entry.question, Palette::rotating(i)));
        push_wrapped(&mut lines, entry.answer, width, "  ");
    }

    lines.push(String::new());
    for line in wrap_text(&content::footer_text(), width) {
        lines.push(line.dimmed().to_string());
    }

    lines
}

fn detail_lines(page: &PageContent, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(gradient_line(page.title(), page.palette));
    for line in wrap_text(page.subtitle, width) {
        lines.push(line.dimmed().to_string());
    }

    for section in page.sections {
        lines.push(String::new());
        section_lines(&mut lines, section, page.palette, width);
    }

    lines
}

fn section_lines(lines: &mut Vec<String>, section: &Section, palette: Palette, width: usize) {
    lines.push(section.heading.bold().to_string());
    if let Some(intro) = section.intro {
        push_wrapped(lines, intro, width, "");
    }

    match section.body {
        SectionBody::Bullets(bullets) => {
            for bullet in bullets {
                push_bullet(lines, bullet, width);
            }
        }
        SectionBody::Steps(steps) => {
            for (i, step) in steps.iter().enumerate() {
                push_wrapped(lines, &format!("{}. {}", i + 1, step), width, "  ");
            }
        }
        SectionBody::Panels(panels) => {
            for panel in panels {
                lines.push(format!("  {}", accent_text(panel.heading, palette).bold()));
                for bullet in panel.bullets {
                    push_bullet(lines, bullet, width);
                }
            }
        }
        SectionBody::Empty => {}
    }

    if !section.ctas.is_empty() {
        lines.push(cta_line(section.ctas, palette));
    }
}

/// Color every character along the palette gradient, like the UI headings.
fn gradient_line(text: &str, palette: Palette) -> String {
    let base = palette.theme();
    let theme = Theme {
        stops: base.terminal_stops(),
        ..*base
    };
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut out = String::new();
    for (i, ch) in chars.into_iter().enumerate() {
        let Rgb { r, g, b } = theme.color_at(i, len);
        out.push_str(&ch.to_string().truecolor(r, g, b).bold().to_string());
    }
    out
}

fn accent_text(text: &str, palette: Palette) -> colored::ColoredString {
    let Rgb { r, g, b } = palette.theme().terminal_accent();
    text.truecolor(r, g, b)
}

/// Render CTAs on one line as `[key] label` pairs, mirroring the key
/// bindings in the UI.
fn cta_line(ctas: &[Cta], palette: Palette) -> String {
    let parts: Vec<String> = ctas
        .iter()
        .map(|cta| {
            let text = format!("[{}] {}", cta.key, cta.label);
            accent_text(&text, palette).bold().to_string()
        })
        .collect();
    format!("  {}", parts.join("   "))
}

fn stat_line(stat: &Stat, palette: Palette) -> String {
    format!(
        "  {}  {}",
        gradient_line(stat.value, palette),
        stat.label.dimmed()
    )
}

fn eyebrow_line(eyebrow: &str) -> String {
    eyebrow.to_uppercase().dimmed().to_string()
}

fn push_wrapped(lines: &mut Vec<String>, text: &str, width: usize, indent: &str) {
    for line in wrap_text(text, width.saturating_sub(indent.chars().count())) {
        lines.push(format!("{}{}", indent, line));
    }
}

/// Bullets get a hanging indent so wrapped lines stay aligned.
fn push_bullet(lines: &mut Vec<String>, bullet: &str, width: usize) {
    for (i, line) in wrap_text(bullet, width.saturating_sub(4)).iter().enumerate() {
        if i == 0 {
            lines.push(format!("  • {}", line));
        } else {
            lines.push(format!("    {}", line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn unknown_route_renders_nothing() {
        plain();
        assert!(page_lines(&RouteMatch::NotFound, 80).is_empty());
    }

    #[test]
    fn landing_renders_hero_rows_impact_faq_footer() {
        plain();
        let lines = page_lines(&RouteMatch::Page(Route::Home), 100);
        let text = lines.join("\n");
        assert!(text.contains("India’s First Integrated Recycling Company"));
        assert!(text.contains("Circularity. Innovation. Sustainability."));
        assert!(text.contains("[1] Explore Our Work"));
        assert!(text.contains("Turning E‑Waste into E‑Value"));
        assert!(text.contains("Circular by Design"));
        assert!(text.contains("Frequently Asked Questions"));
        assert!(text.contains("Refibe Innovations Private Limited"));
    }

    #[test]
    fn detail_page_renders_sections_and_ctas() {
        plain();
        let lines = page_lines(&RouteMatch::Page(Route::EWaste), 100);
        let text = lines.join("\n");
        assert!(text.contains("E‑Waste Recycling"));
        assert!(text.contains("What we handle"));
        assert!(text.contains("[1] Deep‑dive: Safe Data Destruction →"));
    }

    #[test]
    fn panels_render_headings_and_bullets() {
        plain();
        let lines = page_lines(&RouteMatch::Page(Route::DataDestruction), 100);
        let text = lines.join("\n");
        assert!(text.contains("Logical Sanitization"));
        assert!(text.contains("Physical Destruction"));
        assert!(text.contains("  • "));
    }

    #[test]
    fn long_text_wraps_to_width() {
        plain();
        let lines = page_lines(&RouteMatch::Page(Route::Home), 40);
        for line in &lines {
            // Gradient title lines aside, body text respects the width.
            if line.starts_with(' ') || line.starts_with('©') {
                assert!(
                    crate::interactive::text_utils::text_width(line) <= 44,
                    "line too wide: {line:?}"
                );
            }
        }
    }
}
