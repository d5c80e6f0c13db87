//! Figure primitive registry.
//!
//! A figure is a named pair of pure functions: a draw procedure and a hit
//! test over the same attrs/styles payload, so pointer checks agree with what
//! ends up on screen. Custom figures are plain additional registry entries —
//! there is no figure class hierarchy to extend.

pub mod arc;
pub mod circle;
pub mod line;
pub mod polygon;
pub mod rect;
pub mod text;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::core::Coordinate;
use crate::error::{ChartError, ChartResult};
use crate::render::DrawSurface;

pub use arc::{ArcAttrs, check_coordinate_on_arc, draw_arc};
pub use circle::{CircleAttrs, check_coordinate_on_circle, draw_circle};
pub use line::{
    LineAttrs, check_coordinate_on_line, draw_line, get_linear_slope_intercept,
    get_linear_y_from_coordinates, get_linear_y_from_slope_intercept,
};
pub use polygon::{PolygonAttrs, check_coordinate_on_polygon, draw_polygon};
pub use rect::{RectAttrs, check_coordinate_on_rect, draw_rect};
pub use text::{TextAttrs, check_coordinate_on_text, draw_text, get_text_rect};

/// Pixel tolerance added to hit tests of zero-area shapes so thin lines and
/// point-like rects stay clickable.
pub const DEVIATION: f64 = 2.0;

pub type FigureDrawFn =
    Arc<dyn Fn(&mut dyn DrawSurface, &Value, &Value) -> ChartResult<()> + Send + Sync>;
pub type FigureHitTestFn = Arc<dyn Fn(Coordinate, &Value, &Value) -> bool + Send + Sync>;

/// Registry entry: name plus the draw/hit-test pair.
///
/// Attrs and styles cross this boundary as opaque JSON values; each template
/// decodes what it understands.
#[derive(Clone)]
pub struct FigureTemplate {
    name: String,
    draw: FigureDrawFn,
    check: FigureHitTestFn,
}

impl FigureTemplate {
    pub fn new(name: impl Into<String>, draw: FigureDrawFn, check: FigureHitTestFn) -> Self {
        Self {
            name: name.into(),
            draw,
            check,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn draw(
        &self,
        surface: &mut dyn DrawSurface,
        attrs: &Value,
        styles: &Value,
    ) -> ChartResult<()> {
        (self.draw)(surface, attrs, styles)
    }

    /// Whether `coordinate` falls on the figure. Total: undecodable attrs are
    /// simply not hit.
    #[must_use]
    pub fn check_event_on(&self, coordinate: Coordinate, attrs: &Value, styles: &Value) -> bool {
        (self.check)(coordinate, attrs, styles)
    }
}

impl fmt::Debug for FigureTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigureTemplate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Name-keyed figure registry; re-registering a name replaces the previous
/// descriptor.
#[derive(Debug, Clone)]
pub struct FigureRegistry {
    templates: IndexMap<String, FigureTemplate>,
}

impl FigureRegistry {
    /// Empty registry with no figures at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            templates: IndexMap::new(),
        }
    }

    /// Registry pre-loaded with the built-in figures.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(circle::template());
        registry.register(arc::template());
        registry.register(line::template());
        registry.register(polygon::template());
        registry.register(rect::template());
        registry.register(text::template());
        registry
    }

    pub fn register(&mut self, template: FigureTemplate) {
        let name = template.name().to_owned();
        if self.templates.insert(name.clone(), template).is_some() {
            debug!(name = name.as_str(), "replaced figure template");
        }
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&FigureTemplate> {
        self.templates.get(name)
    }

    #[must_use]
    pub fn list_names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }
}

impl Default for FigureRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Accepts a single attrs object or an array of them.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

pub(crate) fn decode_attrs<A: DeserializeOwned>(value: &Value) -> Option<Vec<A>> {
    OneOrMany::<A>::deserialize(value)
        .map(OneOrMany::into_vec)
        .ok()
}

pub(crate) fn require_attrs<A: DeserializeOwned>(name: &str, value: &Value) -> ChartResult<Vec<A>> {
    OneOrMany::<A>::deserialize(value)
        .map(OneOrMany::into_vec)
        .map_err(|error| ChartError::InvalidFigure {
            name: name.to_owned(),
            reason: error.to_string(),
        })
}

pub(crate) fn decode_styles<S: DeserializeOwned + Default>(value: &Value) -> S {
    if value.is_null() {
        return S::default();
    }
    S::deserialize(value).unwrap_or_default()
}

/// Builds a registry template from typed draw/check functions.
pub(crate) fn typed_template<A, S, D, C>(name: &'static str, draw: D, check: C) -> FigureTemplate
where
    A: DeserializeOwned + 'static,
    S: DeserializeOwned + Default + 'static,
    D: Fn(&mut dyn DrawSurface, &[A], &S) + Send + Sync + 'static,
    C: Fn(Coordinate, &[A], &S) -> bool + Send + Sync + 'static,
{
    let draw_fn: FigureDrawFn = Arc::new(move |surface, attrs, styles| {
        let attrs = require_attrs::<A>(name, attrs)?;
        let styles = decode_styles::<S>(styles);
        draw(surface, &attrs, &styles);
        Ok(())
    });
    let check_fn: FigureHitTestFn = Arc::new(move |coordinate, attrs, styles| {
        match decode_attrs::<A>(attrs) {
            Some(attrs) => check(coordinate, &attrs, &decode_styles::<S>(styles)),
            None => false,
        }
    });
    FigureTemplate::new(name, draw_fn, check_fn)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{FigureRegistry, FigureTemplate};
    use crate::core::Coordinate;

    #[test]
    fn default_registry_lists_builtin_figures() {
        let registry = FigureRegistry::with_defaults();
        assert_eq!(
            registry.list_names(),
            vec!["circle", "arc", "line", "polygon", "rect", "text"]
        );
    }

    #[test]
    fn resolve_miss_returns_none() {
        let registry = FigureRegistry::with_defaults();
        assert!(registry.resolve("sparkline").is_none());
    }

    #[test]
    fn register_replaces_existing_name() {
        let mut registry = FigureRegistry::with_defaults();
        let replacement = FigureTemplate::new(
            "circle",
            std::sync::Arc::new(|_, _, _| Ok(())),
            std::sync::Arc::new(|_, _, _| true),
        );
        registry.register(replacement);

        let resolved = registry.resolve("circle").expect("circle registered");
        assert!(resolved.check_event_on(Coordinate::new(-1e9, -1e9), &json!({}), &json!({})));
        // Replacement keeps the entry's position and count.
        assert_eq!(registry.list_names().len(), 6);
    }

    #[test]
    fn builtin_hit_test_ignores_undecodable_attrs() {
        let registry = FigureRegistry::with_defaults();
        let circle = registry.resolve("circle").expect("builtin");
        assert!(!circle.check_event_on(
            Coordinate::new(0.0, 0.0),
            &json!({"bogus": true}),
            &json!({})
        ));
    }
}
