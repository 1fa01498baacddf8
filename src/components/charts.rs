//! Chart Components
//!
//! Age, country, and BMI charts drawn on HTML5 Canvas. Each component
//! redraws inside an effect whenever the record signal changes; a redraw
//! starts by repainting the whole surface, so no stale frame survives.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::AppState;
use crate::stats;

/// Chart colors, cycled by series/slice index
const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "#374151"; // gray-700
const LABEL: &str = "#9ca3af"; // gray-400
const MUTED: &str = "#6b7280"; // gray-500

/// Age histogram: bar chart over the fixed age buckets
#[component]
pub fn AgeHistogram() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let counts = state.records.with(|records| stats::age_histogram(records));

        if let Some(canvas) = canvas_ref.get() {
            draw_age_histogram(&canvas, &counts);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="400" height="300" class="w-full rounded-lg" />
    }
}

/// Country distribution: pie chart with an HTML legend
#[component]
pub fn CountryPie() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let counts = create_memo(move |_| {
        state.records.with(|records| stats::country_counts(records))
    });

    create_effect(move |_| {
        let counts = counts.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_country_pie(&canvas, &counts);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="400" height="300" class="w-full rounded-lg" />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    counts.get()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, (country, count))| {
                            let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", color)
                                    />
                                    <span class="text-sm text-gray-300">
                                        {country} " (" {count} ")"
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// BMI trend: line series over the first records in insertion order
#[component]
pub fn BmiTrend() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = state.records.with(|records| stats::bmi_series(records));

        if let Some(canvas) = canvas_ref.get() {
            draw_bmi_trend(&canvas, &series);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="800" height="300" class="w-full rounded-lg" />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&MUTED.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No data yet", width / 2.0 - 40.0, height / 2.0);
}

/// Draw the age histogram on canvas
fn draw_age_histogram(canvas: &HtmlCanvasElement, counts: &[usize; 4]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Integer y-axis: pick a tick step so 5 gridlines cover the tallest bar
    let max_count = counts.iter().copied().max().unwrap_or(0);
    let tick = ((max_count + 4) / 5).max(1);
    let y_max = (tick * 5) as f64;

    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels, whole counts only
        let value = (5 - i) * tick;
        ctx.set_fill_style(&LABEL.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&value.to_string(), 8.0, y + 4.0);
    }

    // One bar per bucket
    let slot = chart_width / counts.len() as f64;
    let bar_width = slot * 0.6;

    ctx.set_fill_style(&SERIES_COLORS[0].into());
    for (i, &count) in counts.iter().enumerate() {
        let bar_height = count as f64 / y_max * chart_height;
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    // Bucket labels
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");
    for (i, label) in stats::AGE_BUCKETS.iter().enumerate() {
        let x = margin_left + (i as f64 + 0.5) * slot - 14.0;
        let _ = ctx.fill_text(label, x, height - 10.0);
    }

    if max_count == 0 {
        draw_empty_message(&ctx, width, height);
    }
}

/// Draw the country pie chart on canvas
fn draw_country_pie(canvas: &HtmlCanvasElement, counts: &[(String, usize)]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;

    // Slices start at 12 o'clock, separated by background-colored strokes
    ctx.set_stroke_style(&BACKGROUND.into());
    ctx.set_line_width(2.0);

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (idx, (_, count)) in counts.iter().enumerate() {
        let sweep = *count as f64 / total as f64 * std::f64::consts::PI * 2.0;
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];

        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();
        ctx.fill();
        ctx.stroke();

        start += sweep;
    }
}

/// Draw the BMI trend line on canvas
fn draw_bmi_trend(canvas: &HtmlCanvasElement, series: &[(String, Option<f64>)]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    // Y range over the available BMI values
    let mut global_min = f64::INFINITY;
    let mut global_max = f64::NEG_INFINITY;

    for (_, bmi) in series {
        if let Some(value) = bmi {
            global_min = global_min.min(*value);
            global_max = global_max.max(*value);
        }
    }

    // Every BMI may be unavailable; keep an arbitrary valid range so the
    // frame and labels still draw
    if !global_min.is_finite() {
        global_min = 0.0;
        global_max = 1.0;
    }

    // Add padding to y range
    let y_range = global_max - global_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    global_min -= y_padding;
    global_max += y_padding;

    // Draw grid lines
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = global_max - (i as f64 / 5.0) * (global_max - global_min);
        ctx.set_fill_style(&LABEL.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    let slot = chart_width / series.len() as f64;
    let point_x = |i: usize| margin_left + (i as f64 + 0.5) * slot;
    let point_y = |value: f64| {
        margin_top + ((global_max - value) / (global_max - global_min)) * chart_height
    };

    // Line segments, broken where a BMI is unavailable
    let color = SERIES_COLORS[2];
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    let mut in_segment = false;
    for (i, (_, bmi)) in series.iter().enumerate() {
        match bmi {
            Some(value) => {
                if in_segment {
                    ctx.line_to(point_x(i), point_y(*value));
                } else {
                    ctx.move_to(point_x(i), point_y(*value));
                    in_segment = true;
                }
            }
            None => in_segment = false,
        }
    }
    ctx.stroke();

    // Draw points
    ctx.set_fill_style(&color.into());
    for (i, (_, bmi)) in series.iter().enumerate() {
        if let Some(value) = bmi {
            ctx.begin_path();
            let _ = ctx.arc(point_x(i), point_y(*value), 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // Name labels under each slot
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");
    for (i, (name, _)) in series.iter().enumerate() {
        let label: String = name.chars().take(8).collect();
        let x = point_x(i) - 3.0 * label.len() as f64;
        let _ = ctx.fill_text(&label, x, height - 10.0);
    }
}
