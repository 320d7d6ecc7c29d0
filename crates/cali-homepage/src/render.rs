//! HTML page rendering
//!
//! Every function here is pure: the same inputs always produce the same
//! bytes. Dynamic text is HTML-escaped before it is interpolated.

use cali_core::{
    CountryRecord, Dataset, Metric, MetricKind, REFERENCE_FLAG_URL, compare_verdict, display_name,
    flag_url, format_ratio,
};

use crate::format::{DEFAULT_DECIMALS, encode_path_segment, escape_html, format_number};
use crate::site::SiteMode;

const BASE_STYLES: &str = r#"
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    line-height: 1.6;
    max-width: 700px;
    margin: 0 auto;
    padding: 2rem 1rem;
    background: #fafafa;
    color: #333;
  }
  h1 { font-size: 1.8rem; margin-bottom: 0.5rem; }
  .subtitle { color: #666; margin-bottom: 2rem; }
  table {
    width: 100%;
    border-collapse: collapse;
    background: white;
    box-shadow: 0 1px 3px rgba(0,0,0,0.1);
  }
  th, td { padding: 0.75rem 1rem; text-align: left; border-bottom: 1px solid #eee; }
  th { background: #f5f5f5; font-weight: 600; }
  td:nth-child(n+2), th:nth-child(n+2) { text-align: right; }
  .ratio { font-weight: 600; color: #2563eb; }
  .footer { margin-top: 2rem; font-size: 0.875rem; color: #666; }
  .footer a { color: #2563eb; }
  .home-link { margin-bottom: 1rem; }
  .home-link a { color: #2563eb; text-decoration: none; }
  .home-link a:hover { text-decoration: underline; }
  .flag { vertical-align: middle; margin-right: 0.5rem; border-radius: 2px; width: 20px; }
  .metric-link { color: inherit; text-decoration: none; border-bottom: 1px dotted #999; }
  a.metric-link:hover { color: #2563eb; border-bottom-color: #2563eb; }
  .verdict { text-align: center; padding: 2rem 1rem; margin-bottom: 2rem; }
  .verdict-flag { width: 80px; height: auto; border-radius: 4px; margin-bottom: 1rem; }
  .verdict-text { font-size: 1.5rem; font-weight: 600; margin-bottom: 0.5rem; }
  .verdict-text .bigger { color: #16a34a; }
  .verdict-text .smaller { color: #dc2626; }
  .verdict-detail { color: #666; font-size: 1.1rem; }
  .details-header {
    font-size: 1rem;
    color: #666;
    margin-bottom: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
  }
"#;

const HOME_STYLES: &str = r#"
  .search-box {
    width: 100%;
    padding: 0.75rem 1rem;
    font-size: 1rem;
    border: 1px solid #ddd;
    border-radius: 4px;
    margin-bottom: 1.5rem;
  }
  .country-list { list-style: none; columns: 2; column-gap: 2rem; }
  @media (max-width: 500px) { .country-list { columns: 1; } }
  .country-list li { padding: 0.25rem 0; break-inside: avoid; }
  .country-list a { color: #2563eb; text-decoration: none; display: inline-flex; align-items: center; }
  .country-list a:hover { text-decoration: underline; }
  .hidden { display: none; }
"#;

const SEARCH_SCRIPT: &str = r#"
    const search = document.getElementById('search');
    const items = document.querySelectorAll('.country-list li');

    search.addEventListener('input', (e) => {
      const query = e.target.value.toLowerCase();
      items.forEach(item => {
        item.classList.toggle('hidden', !item.textContent.toLowerCase().includes(query));
      });
    });

    search.addEventListener('keydown', (e) => {
      if (e.key !== 'Enter') return;
      const visible = [...items].filter(i => !i.classList.contains('hidden'));
      if (visible.length === 1) {
        visible[0].querySelector('a').click();
      } else if (e.target.value) {
        window.location.href = '/' + encodeURIComponent(e.target.value);
      }
    });
"#;

/// How a metric value is written in the table
struct MetricRow {
    label: &'static str,
    prefix: &'static str,
    suffix: &'static str,
    decimals: usize,
}

const METRIC_ROWS: [MetricRow; 4] = [
    MetricRow {
        label: "Population",
        prefix: "",
        suffix: "M",
        decimals: DEFAULT_DECIMALS,
    },
    MetricRow {
        label: "GDP",
        prefix: "$",
        suffix: "B",
        decimals: DEFAULT_DECIMALS,
    },
    MetricRow {
        label: "GDP per Capita",
        prefix: "$",
        suffix: "",
        decimals: 0,
    },
    MetricRow {
        label: "Land Area",
        prefix: "",
        suffix: " km²",
        decimals: 0,
    },
];

impl MetricRow {
    fn format(&self, metric: &Metric) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_number(metric.value, self.decimals),
            self.suffix
        )
    }
}

/// Value wrapped in a link to its source, with an attribution tooltip
fn metric_link(metric: &Metric, formatted: &str) -> String {
    let title = escape_html(&metric.attribution());
    match &metric.url {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener" class="metric-link" title="{}">{}</a>"#,
            escape_html(url),
            title,
            formatted
        ),
        None => format!(r#"<span class="metric-link" title="{}">{}</span>"#, title, formatted),
    }
}

fn page_head(title: &str, description: Option<&str>, extra_styles: &str) -> String {
    let description = description
        .map(|d| format!("\n  <meta name=\"description\" content=\"{}\">", escape_html(d)))
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{}</title>{}
  <link rel="icon" type="image/png" href="/favicon.png">
  <style>{}{}</style>
</head>"#,
        escape_html(title),
        description,
        BASE_STYLES,
        extra_styles
    )
}

/// Render the home page listing every country
pub fn render_home(dataset: &Dataset, mode: SiteMode) -> String {
    let site = mode.site_name();
    let reference = escape_html(&dataset.reference().name);

    let country_links = dataset
        .countries()
        .iter()
        .map(|c| {
            format!(
                r#"<li><a href="/{}"><img src="{}" alt="" class="flag">{}</a></li>"#,
                encode_path_segment(&c.name),
                flag_url(&c.code, 20),
                escape_html(display_name(&c.name))
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let head = page_head(
        &format!("{} | Compare Countries to {}", site, dataset.reference().name),
        Some(&format!(
            "Compare any country's population, GDP, and land area to {}",
            dataset.reference().name
        )),
        HOME_STYLES,
    );

    format!(
        r#"{head}
<body>
  <h1>{site}</h1>
  <p class="subtitle">Compare any country to {reference}'s population, GDP, and land area</p>

  <input type="text" class="search-box" placeholder="Search for a country..." id="search" autocomplete="off">

  <ul class="country-list" id="countries">
      {country_links}
  </ul>

  <div class="footer">
    <p>Type a country name or click to compare. Data from <a href="https://data.worldbank.org/" target="_blank" rel="noopener">World Bank</a>, updated {generated}.</p>
  </div>

  <script>{SEARCH_SCRIPT}</script>
</body>
</html>"#,
        generated = dataset.generated().format("%B %-d, %Y"),
    )
}

/// Render the comparison page for one country
pub fn render_comparison(subject: &CountryRecord, reference: &CountryRecord, mode: SiteMode) -> String {
    let name = escape_html(display_name(&subject.name));
    let reference_name = escape_html(&reference.name);
    let verdict = compare_verdict(subject, reference);
    let (verdict_class, verdict_word) = if verdict.is_larger {
        ("bigger", "BIGGER")
    } else {
        ("smaller", "SMALLER")
    };

    let rows = METRIC_ROWS
        .iter()
        .zip(MetricKind::ALL)
        .map(|(row, kind)| {
            let subject_metric = subject.metric(kind);
            let reference_metric = reference.metric(kind);
            format!(
                r#"      <tr>
        <td>{}</td>
        <td>{}</td>
        <td>{}</td>
        <td class="ratio">{}</td>
      </tr>"#,
                row.label,
                metric_link(subject_metric, &row.format(subject_metric)),
                metric_link(reference_metric, &row.format(reference_metric)),
                format_ratio(subject_metric.value, reference_metric.value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let head = page_head(
        &format!(
            "{} vs {} | {}",
            display_name(&subject.name),
            reference.name,
            mode.site_name()
        ),
        Some(&format!(
            "Compare {}'s population, GDP, and area to {}",
            display_name(&subject.name),
            reference.name
        )),
        "",
    );

    format!(
        r#"{head}
<body>
  <div class="home-link"><a href="/">← All Countries</a></div>

  <div class="verdict">
    <img src="{verdict_flag}" alt="{name} flag" class="verdict-flag">
    <div class="verdict-text">
      {name} is <span class="{verdict_class}">{verdict_word}</span> than {reference_name}
    </div>
    <div class="verdict-detail">{summary}</div>
  </div>

  <div class="details-header">Details</div>
  <table>
    <thead>
      <tr>
        <th>Metric</th>
        <th><img src="{subject_flag}" alt="" class="flag">{name}</th>
        <th><img src="{REFERENCE_FLAG_URL}" alt="" class="flag">{reference_name}</th>
        <th>Ratio</th>
      </tr>
    </thead>
    <tbody>
{rows}
    </tbody>
  </table>

  <div class="footer">
    <p>Click any number to view its source. Data from World Bank and US government agencies.</p>
  </div>
</body>
</html>"#,
        verdict_flag = flag_url(&subject.code, 80),
        subject_flag = flag_url(&subject.code, 20),
        summary = escape_html(&verdict.summary),
    )
}

/// Render the page for a query that matched nothing
pub fn render_not_found(raw_query: &str, mode: SiteMode) -> String {
    let head = page_head(&format!("Country Not Found | {}", mode.site_name()), None, "");

    format!(
        r#"{head}
<body>
  <div class="home-link"><a href="/">← All Countries</a></div>
  <h1>Country Not Found</h1>
  <p class="subtitle">We couldn't find "{query}" in our database.</p>
  <p>Try searching from the <a href="/">home page</a>, or check the spelling.</p>
</body>
</html>"#,
        query = escape_html(raw_query),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn dataset() -> Dataset {
        Dataset::embedded().unwrap()
    }

    fn country(dataset: &Dataset, code: &str) -> Arc<CountryRecord> {
        dataset
            .countries()
            .iter()
            .find(|c| c.code == code)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_home_lists_every_country_in_order() {
        let dataset = dataset();
        let html = render_home(&dataset, SiteMode::Bigger);

        let mut last = 0;
        for country in dataset.countries() {
            let link = format!("href=\"/{}\"", encode_path_segment(&country.name));
            let pos = html.find(&link).unwrap_or_else(|| panic!("missing {link}"));
            assert!(pos > last, "{} out of order", country.name);
            last = pos;
        }
    }

    #[test]
    fn test_home_uses_display_names_and_raw_links() {
        let html = render_home(&dataset(), SiteMode::Bigger);
        assert!(html.contains(r#"href="/Korea%2C%20Rep.""#));
        assert!(html.contains(">South Korea</a>"));
        assert!(html.contains("https://flagcdn.com/w20/kr.png"));
        assert!(html.contains("updated March 14, 2025"));
    }

    #[test]
    fn test_site_mode_changes_copy_only() {
        let dataset = dataset();
        let bigger = render_home(&dataset, SiteMode::Bigger);
        let smaller = render_home(&dataset, SiteMode::Smaller);
        assert!(bigger.contains("<h1>Bigger Than Cali</h1>"));
        assert!(smaller.contains("<h1>Smaller Than Cali</h1>"));
        assert_eq!(
            bigger.matches("<li>").count(),
            smaller.matches("<li>").count()
        );
    }

    #[test]
    fn test_comparison_has_four_metric_rows() {
        let dataset = dataset();
        let japan = country(&dataset, "JP");
        let html = render_comparison(&japan, dataset.reference(), SiteMode::Bigger);

        assert!(html.contains("Japan is <span class=\"bigger\">BIGGER</span> than California"));
        for label in ["Population", "GDP", "GDP per Capita", "Land Area"] {
            assert!(html.contains(&format!("<td>{label}</td>")), "missing {label}");
        }
        assert_eq!(html.matches("<td class=\"ratio\">").count(), 4);
        assert!(html.contains("124.5M"));
        assert!(html.contains("$4,213B"));
        assert!(html.contains("$33,834"));
        assert!(html.contains("364,500 km²"));
    }

    #[test]
    fn test_comparison_links_to_sources() {
        let dataset = dataset();
        let japan = country(&dataset, "JP");
        let html = render_comparison(&japan, dataset.reference(), SiteMode::Bigger);

        assert!(html.contains(
            r#"href="https://data.worldbank.org/indicator/SP.POP.TOTL?locations=JP""#
        ));
        assert!(html.contains(r#"title="Source: World Bank (2023)""#));
        // Reference land area has no observation year
        assert!(html.contains(r#"title="Source: US Census Bureau">423,970 km²"#));
    }

    #[test]
    fn test_comparison_smaller_verdict() {
        let dataset = dataset();
        let netherlands = country(&dataset, "NL");
        let html = render_comparison(&netherlands, dataset.reference(), SiteMode::Bigger);

        assert!(html.contains("<span class=\"smaller\">SMALLER</span>"));
        assert!(html.contains("% of the population"));
    }

    #[test]
    fn test_metric_without_url_renders_span() {
        let metric = Metric::new(423970.0, "US Census Bureau");
        assert_eq!(
            metric_link(&metric, "423,970 km²"),
            r#"<span class="metric-link" title="Source: US Census Bureau">423,970 km²</span>"#
        );
    }

    #[test]
    fn test_comparison_is_deterministic() {
        let dataset = dataset();
        let country = &dataset.countries()[0];
        let first = render_comparison(country, dataset.reference(), SiteMode::Bigger);
        let second = render_comparison(country, dataset.reference(), SiteMode::Bigger);
        assert_eq!(first, second);
    }

    #[test]
    fn test_not_found_escapes_query() {
        let html = render_not_found("<b>Atlantis</b>", SiteMode::Bigger);
        assert!(html.contains("&lt;b&gt;Atlantis&lt;/b&gt;"));
        assert!(!html.contains("<b>Atlantis</b>"));
    }
}
