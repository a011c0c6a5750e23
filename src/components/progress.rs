//! Progress Bar Component
//!
//! Low-level horizontal bar primitive shared by the higher-level gauges.

use leptos::*;

/// Generic progress bar
///
/// `value` is a fill percentage and is rendered as-is; callers that want
/// clamping apply it before passing the value down.
#[component]
pub fn Progress(
    /// Fill percentage (0-100)
    value: f64,
    /// Extra classes merged onto the track
    #[prop(optional, into)]
    class: Option<String>,
    /// Classes for the fill indicator
    #[prop(default = "bg-indigo-500")]
    indicator_class: &'static str,
) -> impl IntoView {
    let track_class = match class {
        Some(extra) => format!("w-full h-2 bg-gray-700 rounded-full overflow-hidden {}", extra),
        None => "w-full h-2 bg-gray-700 rounded-full overflow-hidden".to_string(),
    };

    view! {
        <div class=track_class>
            <div
                class=format!("{} h-full rounded-full transition-all duration-500 ease-out", indicator_class)
                style=format!("width: {}%", value)
            />
        </div>
    }
}
