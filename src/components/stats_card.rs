//! Stats Card Component
//!
//! Single headline statistic with an icon tile and color accent.

use leptos::*;
use std::fmt;

/// Accent palette for stat cards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatColor {
    #[default]
    Indigo,
    Emerald,
    Amber,
    Rose,
    Purple,
}

impl StatColor {
    /// Classes for the icon tile and the value text
    pub fn classes(self) -> (&'static str, &'static str) {
        match self {
            StatColor::Indigo => ("bg-indigo-500/20 text-indigo-400", "text-indigo-400"),
            StatColor::Emerald => ("bg-emerald-500/20 text-emerald-400", "text-emerald-400"),
            StatColor::Amber => ("bg-amber-500/20 text-amber-400", "text-amber-400"),
            StatColor::Rose => ("bg-rose-500/20 text-rose-400", "text-rose-400"),
            StatColor::Purple => ("bg-purple-500/20 text-purple-400", "text-purple-400"),
        }
    }
}

/// Value shown on a card: a number or free-form text
#[derive(Clone, Debug, PartialEq)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(t) => f.write_str(t),
        }
    }
}

impl From<u32> for StatValue {
    fn from(n: u32) -> Self {
        StatValue::Number(n.into())
    }
}

impl From<f64> for StatValue {
    fn from(n: f64) -> Self {
        StatValue::Number(n)
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue::Text(s.to_string())
    }
}

impl From<String> for StatValue {
    fn from(s: String) -> Self {
        StatValue::Text(s)
    }
}

/// Headline statistic card
#[component]
pub fn StatsCard(
    /// Icon glyph for the tile
    #[prop(into)]
    icon: String,
    /// Short description shown under the value
    #[prop(into)]
    label: String,
    /// Headline value
    #[prop(into)]
    value: StatValue,
    #[prop(optional)]
    color: StatColor,
    /// Entrance-animation delay in milliseconds
    #[prop(default = 0)]
    delay: u32,
    /// Click handler; presence also enables pointer affordances
    #[prop(optional)]
    on_click: Option<Callback<web_sys::MouseEvent>>,
) -> impl IntoView {
    let (tile_class, value_class) = color.classes();

    let card_class = if on_click.is_some() {
        "bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600
         transition-colors cursor-pointer animate-fade-in-up"
    } else {
        "bg-gray-800 rounded-xl p-4 border border-gray-700 animate-fade-in-up"
    };

    view! {
        <div
            class=card_class
            style=format!("animation-delay: {}ms", delay)
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            <div class="flex items-center space-x-3">
                <div class=format!(
                    "w-10 h-10 rounded-lg flex items-center justify-center text-xl {}",
                    tile_class
                )>
                    {icon}
                </div>
                <div>
                    <div class=format!("text-2xl font-bold {}", value_class)>
                        {value.to_string()}
                    </div>
                    <div class="text-gray-400 text-sm">{label}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_render_without_decimals() {
        assert_eq!(StatValue::from(1250u32).to_string(), "1250");
    }

    #[test]
    fn test_fractional_values_keep_their_decimals() {
        assert_eq!(StatValue::from(4.5).to_string(), "4.5");
    }

    #[test]
    fn test_text_values_render_verbatim() {
        assert_eq!(StatValue::from("A+").to_string(), "A+");
    }

    #[test]
    fn test_color_variants_have_distinct_accents() {
        let mut tiles: Vec<_> = [
            StatColor::Indigo,
            StatColor::Emerald,
            StatColor::Amber,
            StatColor::Rose,
            StatColor::Purple,
        ]
        .into_iter()
        .map(|color| color.classes().0)
        .collect();
        tiles.sort();
        tiles.dedup();
        assert_eq!(tiles.len(), 5);
    }
}
