//! HTML export.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::Result;
use std::path::Path;

use interviewsim_core::model::InterviewRecord;
use interviewsim_core::statistics::DashboardStats;
use interviewsim_core::summary::Recommendation;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn tier_class(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::StrongHire => "strong",
        Recommendation::Hire => "hire",
        Recommendation::NoHire => "nohire",
    }
}

/// Generate an HTML page covering `records`: a dashboard overview followed by
/// one section per interview.
pub fn generate_html(records: &[InterviewRecord]) -> String {
    let stats = DashboardStats::compute(records);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let title = match records {
        [single] => format!("Interview summary: {}", html_escape(&single.candidate_name)),
        _ => "Interview records".to_string(),
    };
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"meta\">{} candidates | average score {:.1}/10 | {} strong hires</p>\n",
        stats.total_candidates, stats.average_score, stats.strong_hires
    ));
    html.push_str("</header>\n");

    // Overview table
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<table class=\"summary\" id=\"overview\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Candidate</th><th onclick=\"sortTable(1)\">Role</th><th onclick=\"sortTable(2)\">Score</th><th onclick=\"sortTable(3)\">Recommendation</th><th onclick=\"sortTable(4)\">Date</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for r in records {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.1}</td><td class=\"{}\">{}</td><td>{}</td></tr>\n",
            html_escape(&r.candidate_name),
            r.role.title(),
            r.final_score,
            tier_class(r.recommendation),
            r.recommendation.label(),
            r.start_time.format("%Y-%m-%d"),
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    for r in records {
        html.push_str(&interview_section(r));
    }

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

fn interview_section(r: &InterviewRecord) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"interview\">\n");
    html.push_str(&format!(
        "<h2>{} <span class=\"role\">{}</span></h2>\n",
        html_escape(&r.candidate_name),
        r.role.title()
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{} | {} min | {} questions</p>\n",
        r.start_time.format("%Y-%m-%d %H:%M UTC"),
        r.duration_minutes(),
        r.questions.len()
    ));
    html.push_str(&format!(
        "<p class=\"score {}\"><strong>{:.1}/10</strong> — {}</p>\n",
        tier_class(r.recommendation),
        r.final_score,
        html_escape(r.recommendation.description())
    ));

    html.push_str("<div class=\"columns\">\n");
    html.push_str(&bullet_list("Strengths", &r.strengths));
    html.push_str(&bullet_list("Areas for Development", &r.improvements));
    html.push_str("</div>\n");

    if !r.questions.is_empty() {
        html.push_str(&generate_score_chart(r));
    }

    html.push_str("<table class=\"questions\">\n");
    html.push_str("<thead><tr><th>#</th><th>Question</th><th>Response</th><th>Score</th><th>Note</th></tr></thead>\n<tbody>\n");
    for q in &r.questions {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            q.question_index + 1,
            html_escape(&q.question),
            html_escape(&q.response),
            q.score,
            html_escape(&q.note)
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");
    html
}

fn bullet_list(heading: &str, items: &[String]) -> String {
    let mut html = format!("<div><h3>{heading}</h3>\n<ul>\n");
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    html.push_str("</ul></div>\n");
    html
}

/// Write an HTML export to a file.
pub fn write_html_report(records: &[InterviewRecord], path: &Path) -> Result<()> {
    let html = generate_html(records);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

/// Horizontal bar per answered question, coloured by score band.
fn generate_score_chart(record: &InterviewRecord) -> String {
    let bar_height = 20;
    let max_width = 400;
    let padding = 6;
    let label_width = 60;

    let total_height = record.questions.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, q) in record.questions.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = usize::from(q.score) * max_width / 10;

        let color = match Recommendation::from_score(f64::from(q.score)) {
            Recommendation::StrongHire => "#22c55e",
            Recommendation::Hire => "#eab308",
            Recommendation::NoHire => "#ef4444",
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">Q{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            q.question_index + 1
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}/10</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            q.score
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --strong: #dcfce7; --hire: #fef9c3; --nohire: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --strong: #064e3b; --hire: #713f12; --nohire: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.role { font-size: 0.9rem; font-weight: normal; color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; vertical-align: top; }
th { background: var(--border); cursor: pointer; }
.strong { background: var(--strong); }
.hire { background: var(--hire); }
.nohire { background: var(--nohire); }
.score { padding: 0.5rem 1rem; border-radius: 8px; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('overview');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    return asc ? va.localeCompare(vb, undefined, {numeric: true}) : vb.localeCompare(va, undefined, {numeric: true});
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;
