//! Flattens a [`StyleData`] record into inline CSS properties.
//!
//! Resolution is total: absent fields are skipped, nothing fails. Property
//! keys keep the authoring layer's medial casing ("backgroundColor"); see
//! [`crate::css`] for the hyphenated serialization.
use crate::breakpoint::Breakpoint;
use crate::data::StyleData;
use indexmap::IndexMap;
use std::fmt;

/// Flat property -> value map, in declaration order.
pub type StyleMap = IndexMap<String, String>;

fn put<V: fmt::Display>(styles: &mut StyleMap, property: &str, value: V) {
    styles.insert(property.to_owned(), value.to_string());
}

impl StyleData {
    /// Resolves this record into a flat property map.
    pub fn resolve(&self) -> StyleMap {
        let mut styles = StyleMap::new();

        if let Some(layout) = &self.layout {
            if let Some(v) = &layout.width {
                put(&mut styles, "width", v);
            }
            if let Some(v) = &layout.height {
                put(&mut styles, "height", v);
            }
            if let Some(v) = &layout.min_width {
                put(&mut styles, "minWidth", v);
            }
            if let Some(v) = &layout.max_width {
                put(&mut styles, "maxWidth", v);
            }
            if let Some(v) = &layout.min_height {
                put(&mut styles, "minHeight", v);
            }
            if let Some(v) = &layout.max_height {
                put(&mut styles, "maxHeight", v);
            }
            if let Some(v) = &layout.margin {
                put(&mut styles, "margin", v);
            }
            if let Some(v) = &layout.padding {
                put(&mut styles, "padding", v);
            }
            if let Some(v) = &layout.display {
                put(&mut styles, "display", v);
            }
            if let Some(v) = &layout.position {
                put(&mut styles, "position", v);
            }
            if let Some(v) = &layout.top {
                put(&mut styles, "top", v);
            }
            if let Some(v) = &layout.right {
                put(&mut styles, "right", v);
            }
            if let Some(v) = &layout.bottom {
                put(&mut styles, "bottom", v);
            }
            if let Some(v) = &layout.left {
                put(&mut styles, "left", v);
            }
            if let Some(v) = layout.z_index {
                put(&mut styles, "zIndex", v);
            }
            if let Some(v) = &layout.text_align {
                put(&mut styles, "textAlign", v);
            }
            if let Some(v) = &layout.grid_column {
                put(&mut styles, "gridColumn", v);
            }
            if let Some(v) = &layout.grid_row {
                put(&mut styles, "gridRow", v);
            }
        }

        if let Some(typography) = &self.typography {
            if let Some(v) = &typography.font_size {
                put(&mut styles, "fontSize", v);
            }
            if let Some(v) = &typography.font_weight {
                put(&mut styles, "fontWeight", v);
            }
            if let Some(v) = &typography.font_family {
                put(&mut styles, "fontFamily", v);
            }
            if let Some(v) = &typography.font_style {
                put(&mut styles, "fontStyle", v);
            }
            if let Some(v) = &typography.line_height {
                put(&mut styles, "lineHeight", v);
            }
            if let Some(v) = &typography.letter_spacing {
                put(&mut styles, "letterSpacing", v);
            }
            if let Some(v) = &typography.text_align {
                put(&mut styles, "textAlign", v);
            }
            if let Some(v) = &typography.text_decoration {
                put(&mut styles, "textDecoration", v);
            }
            if let Some(v) = &typography.text_transform {
                put(&mut styles, "textTransform", v);
            }
            if let Some(v) = &typography.color {
                put(&mut styles, "color", v);
            }
            if let Some(v) = &typography.text_shadow {
                put(&mut styles, "textShadow", v);
            }
            if let Some(v) = &typography.white_space {
                put(&mut styles, "whiteSpace", v);
            }
            if let Some(v) = &typography.word_break {
                put(&mut styles, "wordBreak", v);
            }
        }

        if let Some(background) = &self.background {
            // A gradient claims the composite `background` property; the
            // separate color/image entries would be dead declarations under
            // it, so they are suppressed.
            if background.gradient.is_none() {
                if let Some(v) = &background.color {
                    put(&mut styles, "backgroundColor", v);
                }
                if let Some(v) = &background.image {
                    put(&mut styles, "backgroundImage", format!("url({v})"));
                }
            }
            if let Some(v) = &background.size {
                put(&mut styles, "backgroundSize", v);
            }
            if let Some(v) = &background.position {
                put(&mut styles, "backgroundPosition", v);
            }
            if let Some(v) = &background.repeat {
                put(&mut styles, "backgroundRepeat", v);
            }
            if let Some(v) = &background.attachment {
                put(&mut styles, "backgroundAttachment", v);
            }
            if let Some(v) = &background.gradient {
                put(&mut styles, "background", v);
            }
        }

        if let Some(border) = &self.border {
            if let Some(v) = &border.width {
                put(&mut styles, "borderWidth", v);
            }
            if let Some(v) = &border.style {
                put(&mut styles, "borderStyle", v);
            }
            if let Some(v) = &border.color {
                put(&mut styles, "borderColor", v);
            }
            if let Some(v) = &border.radius {
                put(&mut styles, "borderRadius", v);
            }
            if let Some(v) = &border.top_width {
                put(&mut styles, "borderTopWidth", v);
            }
            if let Some(v) = &border.right_width {
                put(&mut styles, "borderRightWidth", v);
            }
            if let Some(v) = &border.bottom_width {
                put(&mut styles, "borderBottomWidth", v);
            }
            if let Some(v) = &border.left_width {
                put(&mut styles, "borderLeftWidth", v);
            }
            if let Some(v) = &border.top_left_radius {
                put(&mut styles, "borderTopLeftRadius", v);
            }
            if let Some(v) = &border.top_right_radius {
                put(&mut styles, "borderTopRightRadius", v);
            }
            if let Some(v) = &border.bottom_left_radius {
                put(&mut styles, "borderBottomLeftRadius", v);
            }
            if let Some(v) = &border.bottom_right_radius {
                put(&mut styles, "borderBottomRightRadius", v);
            }
        }

        if let Some(effects) = &self.effects {
            if let Some(v) = &effects.box_shadow {
                put(&mut styles, "boxShadow", v);
            }
            if let Some(v) = &effects.text_shadow {
                put(&mut styles, "textShadow", v);
            }
            if let Some(v) = effects.opacity {
                put(&mut styles, "opacity", v);
            }
            if let Some(v) = &effects.transform {
                put(&mut styles, "transform", v);
            }
            if let Some(v) = &effects.transform_origin {
                put(&mut styles, "transformOrigin", v);
            }
            if let Some(v) = &effects.filter {
                put(&mut styles, "filter", v);
            }
            if let Some(v) = &effects.backdrop_filter {
                put(&mut styles, "backdropFilter", v);
            }
            if let Some(v) = &effects.transition {
                put(&mut styles, "transition", v);
            }
            if let Some(v) = &effects.cursor {
                put(&mut styles, "cursor", v);
            }
            if let Some(v) = &effects.object_fit {
                put(&mut styles, "objectFit", v);
            }
        }

        if let Some(flex) = &self.flex {
            if let Some(v) = &flex.flex_direction {
                put(&mut styles, "flexDirection", v);
            }
            if let Some(v) = &flex.justify_content {
                put(&mut styles, "justifyContent", v);
            }
            if let Some(v) = &flex.align_items {
                put(&mut styles, "alignItems", v);
            }
            if let Some(v) = &flex.align_content {
                put(&mut styles, "alignContent", v);
            }
            if let Some(v) = &flex.flex_wrap {
                put(&mut styles, "flexWrap", v);
            }
            if let Some(v) = &flex.gap {
                put(&mut styles, "gap", v);
            }
        }

        if let Some(grid) = &self.grid {
            if let Some(v) = &grid.grid_template_columns {
                put(&mut styles, "gridTemplateColumns", v);
            }
            if let Some(v) = &grid.grid_template_rows {
                put(&mut styles, "gridTemplateRows", v);
            }
            if let Some(v) = &grid.grid_gap {
                put(&mut styles, "gridGap", v);
            }
            if let Some(v) = &grid.grid_column_gap {
                put(&mut styles, "gridColumnGap", v);
            }
            if let Some(v) = &grid.grid_row_gap {
                put(&mut styles, "gridRowGap", v);
            }
            if let Some(v) = &grid.gap {
                put(&mut styles, "gap", v);
            }
            if let Some(v) = &grid.align_items {
                put(&mut styles, "alignItems", v);
            }
            if let Some(v) = &grid.justify_items {
                put(&mut styles, "justifyItems", v);
            }
            if let Some(v) = &grid.justify_content {
                put(&mut styles, "justifyContent", v);
            }
            if let Some(v) = &grid.align_content {
                put(&mut styles, "alignContent", v);
            }
        }

        styles
    }

    /// Resolves only the named breakpoint's override set; empty when the
    /// record has no overrides for it.
    pub fn breakpoint_overrides(&self, breakpoint: Breakpoint) -> StyleMap {
        self.responsive
            .as_ref()
            .and_then(|responsive| responsive.get(breakpoint))
            .map(StyleData::resolve)
            .unwrap_or_default()
    }

    /// Resolves the base record, then overlays the overrides of the single
    /// breakpoint active at `width`. Overrides win per property; base
    /// properties they do not name survive.
    pub fn resolve_at(&self, width: u32) -> StyleMap {
        let mut styles = self.resolve();
        for (property, value) in self.breakpoint_overrides(Breakpoint::from_width(width)) {
            styles.insert(property, value);
        }
        styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn style(value: serde_json::Value) -> StyleData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_record_resolves_empty() {
        assert!(StyleData::default().resolve().is_empty());
    }

    #[test]
    fn test_numeric_fields_are_stringified() {
        let styles = style(json!({
            "layout": { "zIndex": 100 },
            "typography": { "fontWeight": 600, "lineHeight": 1.5 },
            "effects": { "opacity": 0.8 }
        }))
        .resolve();
        assert_eq!(styles["zIndex"], "100");
        assert_eq!(styles["fontWeight"], "600");
        assert_eq!(styles["lineHeight"], "1.5");
        assert_eq!(styles["opacity"], "0.8");
    }

    #[test]
    fn test_background_image_is_wrapped_as_url() {
        let styles = style(json!({
            "background": { "image": "https://cdn.example.com/hero.webp" }
        }))
        .resolve();
        assert_eq!(styles["backgroundImage"], "url(https://cdn.example.com/hero.webp)");
    }

    #[test]
    fn test_gradient_wins_over_color_and_image() {
        let styles = style(json!({
            "layout": { "width": "100%" },
            "background": {
                "gradient": "linear-gradient(45deg, #ff0000, #0000ff)",
                "color": "#fff",
                "image": "hero.png"
            }
        }))
        .resolve();
        assert_eq!(styles["background"], "linear-gradient(45deg, #ff0000, #0000ff)");
        assert_eq!(styles["width"], "100%");
        assert!(!styles.contains_key("backgroundColor"));
        assert!(!styles.contains_key("backgroundImage"));
    }

    #[test]
    fn test_resolve_at_merges_active_breakpoint_only() {
        let data = style(json!({
            "typography": { "color": "black" },
            "responsive": {
                "mobile": { "typography": { "color": "red" } }
            }
        }));
        assert_eq!(data.resolve_at(500)["color"], "red");
        assert_eq!(data.resolve_at(1200)["color"], "black");
    }

    #[test]
    fn test_override_keeps_untouched_base_properties() {
        let data = style(json!({
            "layout": { "width": "50%", "padding": "20px" },
            "responsive": {
                "tablet": { "layout": { "width": "100%" } }
            }
        }));
        let styles = data.resolve_at(800);
        assert_eq!(styles["width"], "100%");
        assert_eq!(styles["padding"], "20px");
    }

    #[test]
    fn test_large_desktop_is_never_width_selected() {
        let data = style(json!({
            "typography": { "color": "black" },
            "responsive": {
                "largeDesktop": { "typography": { "color": "gold" } }
            }
        }));
        assert_eq!(data.resolve_at(1920)["color"], "black");
    }
}
