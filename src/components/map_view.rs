//! Map View Component
//!
//! Canvas-rendered map centered on the current location. Uses an
//! equirectangular approximation at a fixed zoom: good enough for a
//! city-scale viewport, and it keeps the pixel/coordinate math invertible
//! so clicks map straight back to coordinates.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::risk_indicator::risk_color;
use crate::geolocation::DEFAULT_LOCATION;
use crate::state::global::{Coordinate, PredictionResult};

const MAP_WIDTH: u32 = 800;
const MAP_HEIGHT: u32 = 400;

/// Tile-style zoom level for the fixed viewport scale.
const MAP_ZOOM: u32 = 13;

/// Graticule spacing in degrees.
const GRID_STEP_DEG: f64 = 0.01;

/// Degrees spanned by one canvas pixel at a zoom level (256px tiles).
pub fn degrees_per_pixel(zoom: u32) -> f64 {
    360.0 / (256.0 * (1u64 << zoom) as f64)
}

/// Map a canvas pixel to the coordinate under it.
pub fn pixel_to_coordinate(
    center: Coordinate,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Coordinate {
    let dpp = degrees_per_pixel(MAP_ZOOM);
    Coordinate {
        // Canvas y grows downward; latitude grows upward.
        lat: center.lat - (y - height / 2.0) * dpp,
        lng: center.lng + (x - width / 2.0) * dpp,
    }
}

/// Map a coordinate to its canvas pixel.
pub fn coordinate_to_pixel(
    center: Coordinate,
    coord: Coordinate,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let dpp = degrees_per_pixel(MAP_ZOOM);
    (
        width / 2.0 + (coord.lng - center.lng) / dpp,
        height / 2.0 - (coord.lat - center.lat) / dpp,
    )
}

/// Interactive map with click-to-select
#[component]
pub fn MapView(
    #[prop(into)]
    location: Signal<Option<Coordinate>>,
    #[prop(into)]
    prediction: Signal<Option<PredictionResult>>,
    #[prop(into)]
    on_location_change: Callback<Coordinate>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the location or prediction changes.
    create_effect(move |_| {
        let center = location.get().unwrap_or(DEFAULT_LOCATION);
        let prediction = prediction.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_map(&canvas, center, prediction.as_ref());
        }
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let center = location.get_untracked().unwrap_or(DEFAULT_LOCATION);

        // The canvas is CSS-scaled; convert event offsets to canvas pixels.
        let scale_x = canvas.width() as f64 / canvas.client_width().max(1) as f64;
        let scale_y = canvas.height() as f64 / canvas.client_height().max(1) as f64;
        let x = ev.offset_x() as f64 * scale_x;
        let y = ev.offset_y() as f64 * scale_y;

        let coord =
            pixel_to_coordinate(center, x, y, canvas.width() as f64, canvas.height() as f64);
        on_location_change.call(coord);
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-4">
            <canvas
                node_ref=canvas_ref
                width=MAP_WIDTH
                height=MAP_HEIGHT
                on:click=on_click
                class="w-full rounded-lg cursor-crosshair"
            />
            <MapPopup location=location prediction=prediction />
        </div>
    }
}

/// Marker popup strip under the map
#[component]
fn MapPopup(
    #[prop(into)]
    location: Signal<Option<Coordinate>>,
    #[prop(into)]
    prediction: Signal<Option<PredictionResult>>,
) -> impl IntoView {
    view! {
        <div class="mt-3 text-sm text-gray-300">
            {move || {
                let position = location
                    .get()
                    .map(|c| format!("{:.4}, {:.4}", c.lat, c.lng))
                    .unwrap_or_else(|| "—".to_string());

                match prediction.get() {
                    Some(p) => {
                        let weather = p
                            .weather_data
                            .as_ref()
                            .and_then(|w| serde_json::to_string(w).ok());
                        view! {
                            <div class="space-y-1">
                                <div>
                                    <span class="font-semibold">"Accident Risk: "</span>
                                    {format!("{:.1}%", p.prediction * 100.0)}
                                    <span class="text-gray-500 ml-2">{position}</span>
                                </div>
                                {weather
                                    .map(|w| view! {
                                        <div class="text-gray-400 break-all">
                                            <span class="font-semibold">"Weather: "</span>
                                            {w}
                                        </div>
                                    })}
                            </div>
                        }
                            .into_view()
                    }
                    None => view! {
                        <div class="text-gray-400">
                            "Click on the map to get a prediction"
                            <span class="text-gray-500 ml-2">{position}</span>
                        </div>
                    }
                        .into_view(),
                }
            }}
        </div>
    }
}

/// Draw the map viewport: graticule, marker, and risk halo.
fn draw_map(canvas: &HtmlCanvasElement, center: Coordinate, prediction: Option<&PredictionResult>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let dpp = degrees_per_pixel(MAP_ZOOM);

    // Background
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Graticule
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&"#9ca3af".into()); // gray-400
    ctx.set_font("11px sans-serif");

    let lng_min = center.lng - width / 2.0 * dpp;
    let lng_max = center.lng + width / 2.0 * dpp;
    let mut lng = (lng_min / GRID_STEP_DEG).ceil() * GRID_STEP_DEG;
    while lng < lng_max {
        let (x, _) = coordinate_to_pixel(center, Coordinate::new(center.lat, lng), width, height);
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        ctx.stroke();
        let _ = ctx.fill_text(&format!("{:.3}", lng), x + 3.0, height - 5.0);
        lng += GRID_STEP_DEG;
    }

    let lat_min = center.lat - height / 2.0 * dpp;
    let lat_max = center.lat + height / 2.0 * dpp;
    let mut lat = (lat_min / GRID_STEP_DEG).ceil() * GRID_STEP_DEG;
    while lat < lat_max {
        let (_, y) = coordinate_to_pixel(center, Coordinate::new(lat, center.lng), width, height);
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        ctx.stroke();
        let _ = ctx.fill_text(&format!("{:.3}", lat), 5.0, y - 3.0);
        lat += GRID_STEP_DEG;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;

    // Risk halo around the marker once a prediction exists
    if let Some(p) = prediction {
        let color = risk_color(p.insights.risk_level);
        ctx.set_global_alpha(0.15);
        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, 36.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
        ctx.set_global_alpha(1.0);

        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, 36.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.stroke();
    }

    // Marker
    ctx.set_fill_style(&"#FF9800".into()); // primary orange
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, 6.0, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();
    ctx.set_stroke_style(&"#ffffff".into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, 6.0, 0.0, std::f64::consts::PI * 2.0);
    ctx.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 800.0;
    const H: f64 = 400.0;

    #[test]
    fn viewport_scale_matches_the_zoom_level() {
        let dpp = degrees_per_pixel(13);
        assert!((dpp - 360.0 / (256.0 * 8192.0)).abs() < 1e-12);
    }

    #[test]
    fn center_pixel_is_the_center_coordinate() {
        let center = Coordinate::new(12.9716, 77.5946);
        let coord = pixel_to_coordinate(center, W / 2.0, H / 2.0, W, H);
        assert!((coord.lat - center.lat).abs() < 1e-9);
        assert!((coord.lng - center.lng).abs() < 1e-9);
    }

    #[test]
    fn projection_round_trips() {
        let center = Coordinate::new(12.9716, 77.5946);
        let (x, y) = (123.0, 301.0);
        let coord = pixel_to_coordinate(center, x, y, W, H);
        let (x2, y2) = coordinate_to_pixel(center, coord, W, H);
        assert!((x - x2).abs() < 1e-6);
        assert!((y - y2).abs() < 1e-6);
    }

    #[test]
    fn clicks_above_center_move_north() {
        let center = Coordinate::new(12.9716, 77.5946);
        let north = pixel_to_coordinate(center, W / 2.0, H / 2.0 - 50.0, W, H);
        assert!(north.lat > center.lat);
        let east = pixel_to_coordinate(center, W / 2.0 + 50.0, H / 2.0, W, H);
        assert!(east.lng > center.lng);
    }
}
