//! SVG chart sheet and text summary for a dashboard report.
//!
//! The sheet stacks three panels:
//! - Monthly units line chart (all products combined)
//! - Last month bar chart (one bar per product)
//! - Product table rows with a sparkline each

use crate::aggregator::series::{bar_heights, line_chart_points};
use crate::parser::schema::{DashboardReport, Point};
use crate::utils::config::{
    LINE_CHART_HEIGHT, LINE_CHART_STEP, MIN_CHART_WIDTH, SPARKLINE_HEIGHT, SPARKLINE_WIDTH,
};
use crate::utils::error::ChartError;
use log::info;

const ACCENT: &str = "#06b6d4";
const BAR_FILL: &str = "#1d4ed8";
const MUTED: &str = "#94a3b8";
const BACKGROUND: &str = "#121212";

const PANEL_MARGIN: usize = 20;
const TITLE_HEIGHT: usize = 40;
const LINE_PANEL_HEIGHT: usize = 160;
const BAR_PANEL_HEIGHT: usize = 170;
const BAR_AREA_HEIGHT: f64 = 120.0;
const ROW_HEIGHT: usize = 48;

/// Chart sheet configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Fictitious Telecom - Operations Dashboard".to_string(),
            width: 960,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Render the chart sheet for a report
///
/// # Errors
/// * `ChartError::EmptySnapshot` - the report has no products
/// * `ChartError::InvalidWidth` - configured width below `MIN_CHART_WIDTH`
pub fn generate_charts(
    report: &DashboardReport,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if report.product_count == 0 {
        return Err(ChartError::EmptySnapshot);
    }

    let config = config.cloned().unwrap_or_default();
    if config.width < MIN_CHART_WIDTH {
        return Err(ChartError::InvalidWidth {
            width: config.width,
            min: MIN_CHART_WIDTH,
        });
    }

    info!(
        "Generating chart sheet: {} months, {} products, {} table rows",
        report.monthly_units.len(),
        report.last_month.len(),
        report.filtered.len()
    );

    let width = config.width;
    let line_y = TITLE_HEIGHT;
    let bar_y = line_y + LINE_PANEL_HEIGHT;
    let table_y = bar_y + BAR_PANEL_HEIGHT;
    let total_height = table_y + 30 + report.filtered.len().max(1) * ROW_HEIGHT + PANEL_MARGIN;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = total_height
    ));
    svg.push_str(&format!(
        r#"<rect width="100%" height="100%" fill="{}"/><style>text {{ font: 12px sans-serif; fill: {}; }} .title {{ font-size: 18px; font-weight: bold; fill: white; }}</style>"#,
        BACKGROUND, MUTED
    ));
    svg.push_str(&format!(
        r#"<text x="{}" y="26" class="title">{}</text>"#,
        PANEL_MARGIN,
        escape_xml(&config.title)
    ));

    render_line_chart(report, &mut svg, width, line_y);
    render_bar_chart(report, &mut svg, width, bar_y);
    render_table(report, &mut svg, table_y);

    svg.push_str("</svg>");

    info!("Chart sheet generated ({} bytes)", svg.len());
    Ok(svg)
}

fn render_line_chart(report: &DashboardReport, out: &mut String, width: usize, y: usize) {
    out.push_str(&format!(
        r#"<text x="{}" y="{}">Monthly units sold</text>"#,
        PANEL_MARGIN,
        y + 14
    ));

    let units: Vec<u64> = report.monthly_units.iter().map(|m| m.units).collect();
    let view_width = (units.len().max(1) as f64 * LINE_CHART_STEP) as usize;

    out.push_str(&format!(
        r#"<svg x="{}" y="{}" width="{}" height="128" viewBox="0 0 {} {}" preserveAspectRatio="none">"#,
        PANEL_MARGIN,
        y + 22,
        width - 2 * PANEL_MARGIN,
        view_width,
        LINE_CHART_HEIGHT
    ));
    out.push_str(&format!(
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="3"/>"#,
        points_attr(&line_chart_points(&units)),
        ACCENT
    ));
    for (i, month) in report.monthly_units.iter().enumerate() {
        out.push_str(&format!(
            r#"<text x="{}" y="116" font-size="11">{}</text>"#,
            i as f64 * LINE_CHART_STEP + 12.0,
            escape_xml(&month.month)
        ));
    }
    out.push_str("</svg>");
}

fn render_bar_chart(report: &DashboardReport, out: &mut String, width: usize, y: usize) {
    out.push_str(&format!(
        r#"<text x="{}" y="{}">Last month - sales per product (units)</text>"#,
        PANEL_MARGIN,
        y + 14
    ));

    let values: Vec<u64> = report.last_month.iter().map(|s| s.value).collect();
    let heights = bar_heights(&values);
    let area_width = (width - 2 * PANEL_MARGIN) as f64;
    let slot = area_width / values.len().max(1) as f64;
    let bar_width = (slot - 12.0).max(2.0);
    let baseline = (y + 22) as f64 + BAR_AREA_HEIGHT;

    for (i, (sale, pct)) in report.last_month.iter().zip(&heights).enumerate() {
        let h = BAR_AREA_HEIGHT * pct / 100.0;
        let x = PANEL_MARGIN as f64 + i as f64 * slot;
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="4" fill="{}"><title>{}: {}</title></rect>"#,
            x,
            baseline - h,
            bar_width,
            h,
            BAR_FILL,
            escape_xml(&sale.name),
            sale.value
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" fill="white">{}</text>"#,
            x + bar_width / 2.0,
            baseline - h + 14.0,
            sale.value
        ));
        let short_name = sale.name.split(' ').next().unwrap_or(&sale.name);
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="10">{}</text>"#,
            x + bar_width / 2.0,
            baseline + 14.0,
            escape_xml(short_name)
        ));
    }
}

fn render_table(report: &DashboardReport, out: &mut String, y: usize) {
    out.push_str(&format!(
        r#"<text x="{}" y="{}">Products &amp; pricing ({} shown)</text>"#,
        PANEL_MARGIN,
        y + 14,
        report.filtered.len()
    ));

    if report.filtered.is_empty() {
        out.push_str(&format!(
            r#"<text x="{}" y="{}">No matching products</text>"#,
            PANEL_MARGIN,
            y + 30 + ROW_HEIGHT / 2
        ));
        return;
    }

    for (i, row) in report.filtered.iter().enumerate() {
        let row_y = y + 30 + i * ROW_HEIGHT;
        let text_y = row_y + ROW_HEIGHT / 2;
        out.push_str(&format!(
            r#"<text x="{}" y="{}" fill="white">{}</text><text x="260" y="{}">{}</text><text x="400" y="{}">{:.2}</text><text x="500" y="{}">{}</text>"#,
            PANEL_MARGIN,
            text_y,
            escape_xml(&row.name),
            text_y,
            escape_xml(&row.category),
            text_y,
            row.price,
            text_y,
            row.stock
        ));
        out.push_str(&format!(
            r#"<svg x="600" y="{}" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="none"><polyline points="{}" fill="none" stroke="{}" stroke-width="2"/></svg>"#,
            row_y + 4,
            SPARKLINE_WIDTH,
            SPARKLINE_HEIGHT,
            SPARKLINE_WIDTH,
            SPARKLINE_HEIGHT,
            points_attr(&row.sparkline),
            ACCENT
        ));
    }
}

/// Format points as an SVG `points` attribute value
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Create a text summary of the report for the terminal
pub fn generate_text_summary(report: &DashboardReport, max_rows: usize) -> String {
    let mut lines = Vec::new();
    let totals = &report.totals;

    lines.push("  HEADLINE METRICS".to_string());
    lines.push(format!("  Total revenue:      {:>14.2}", totals.total_revenue));
    lines.push(format!("  Units sold:         {:>14}", totals.total_units));
    lines.push(format!("  Revenue last month: {:>14.2}", totals.last_revenue));
    lines.push(format!("  Previous month:     {:>14.2}", totals.prev_revenue));
    lines.push(format!("  Growth rate:        {:>13.2}%", totals.growth_rate));
    lines.push(String::new());

    lines.push("  PRODUCTS".to_string());
    lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━┳━━━━━━━━━━┳━━━━━━━━━━┓".to_string());
    lines.push(format!(
        "  ┃ {:<28} ┃ {:<14} ┃ {:>10} ┃ {:>8} ┃ {:>8} ┃",
        "Product", "Category", "Price", "Stock", "Units"
    ));
    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━━╋━━━━━━━━━━┫".to_string());

    for row in report.filtered.iter().take(max_rows) {
        lines.push(format!(
            "  ┃ {:<28} ┃ {:<14} ┃ {:>10.2} ┃ {:>8} ┃ {:>8} ┃",
            truncate(&row.name, 28),
            truncate(&row.category, 14),
            row.price,
            row.stock,
            row.units
        ));
    }

    lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━┻━━━━━━━━━━┻━━━━━━━━━━┛".to_string());

    if report.filtered.len() > max_rows {
        lines.push(format!(
            "   (Showing {} of {} matching products)",
            max_rows,
            report.filtered.len()
        ));
    }

    lines.push(String::new());
    lines.push("  INSIGHTS".to_string());
    lines.push(format!(
        "  - Top selling product by units: {}",
        report.top_seller.as_deref().unwrap_or("no data")
    ));
    let restock = if report.restock.is_empty() {
        "None".to_string()
    } else {
        report.restock.join(", ")
    };
    lines.push(format!("  - Consider restocking: {}", restock));

    lines.join("\n")
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}
