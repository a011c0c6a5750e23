//! Progress Ring Component
//!
//! SVG ring whose filled arc length encodes a percentage.

use leptos::*;

/// Stroke geometry for a progress ring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub circumference: f64,
    /// Dash offset for the arc circle: `circumference` leaves the ring
    /// empty, `0.0` closes it.
    pub offset: f64,
}

/// Compute the ring's stroke geometry from a completion percentage.
///
/// `progress` is expected in 0-100 but is not clamped: values outside
/// that range push the offset outside `[0, circumference]` and the arc
/// under- or over-draws accordingly.
pub fn ring_geometry(progress: f64, size: f64, stroke_width: f64) -> RingGeometry {
    let radius = (size - stroke_width) / 2.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let offset = circumference - (progress / 100.0) * circumference;

    RingGeometry {
        radius,
        circumference,
        offset,
    }
}

/// Circular progress indicator
#[component]
pub fn ProgressRing(
    /// Completion percentage (0-100)
    progress: f64,
    /// Outer diameter in pixels
    #[prop(default = 120.0)]
    size: f64,
    /// Stroke width in pixels
    #[prop(default = 8.0)]
    stroke_width: f64,
    /// CSS color for the filled arc
    #[prop(into, default = String::from("#6366f1"))]
    color: String,
    /// Content rendered in the middle of the ring
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let geometry = ring_geometry(progress, size, stroke_width);
    let center = size / 2.0;

    view! {
        <div
            class="relative inline-flex items-center justify-center"
            style=format!("width: {}px; height: {}px", size, size)
        >
            // Rotated so the arc starts at 12 o'clock
            <svg width=size height=size class="-rotate-90">
                // Track
                <circle
                    cx=center
                    cy=center
                    r=geometry.radius
                    fill="none"
                    stroke="#374151"
                    stroke-width=stroke_width
                />
                // Filled arc
                <circle
                    cx=center
                    cy=center
                    r=geometry.radius
                    fill="none"
                    stroke=color
                    stroke-width=stroke_width
                    stroke-linecap="round"
                    stroke-dasharray=geometry.circumference
                    stroke-dashoffset=geometry.offset
                    class="transition-all duration-700 ease-out"
                />
            </svg>

            {children.map(|children| view! {
                <div class="absolute inset-0 flex items-center justify-center">
                    {children()}
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_progress_offsets_full_circumference() {
        let geometry = ring_geometry(0.0, 120.0, 8.0);
        assert_eq!(geometry.offset, geometry.circumference);
    }

    #[test]
    fn test_full_progress_has_zero_offset() {
        let geometry = ring_geometry(100.0, 120.0, 8.0);
        assert_eq!(geometry.offset, 0.0);
    }

    #[test]
    fn test_drawn_arc_proportional_to_progress() {
        let geometry = ring_geometry(50.0, 120.0, 8.0);
        let drawn = geometry.circumference - geometry.offset;
        assert!((drawn - geometry.circumference / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_radius_accounts_for_stroke_width() {
        let geometry = ring_geometry(0.0, 120.0, 8.0);
        assert_eq!(geometry.radius, 56.0);
        assert!((geometry.circumference - 2.0 * std::f64::consts::PI * 56.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_progress_not_clamped() {
        let over = ring_geometry(150.0, 120.0, 8.0);
        assert!(over.offset < 0.0);

        let under = ring_geometry(-25.0, 120.0, 8.0);
        assert!(under.offset > under.circumference);
    }
}
