//! Declarative chart configuration and the per-chart descriptor state
//! (palette cursor, category-to-color map) that persists across updates.

use crate::palette;
use ahash::RandomState;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Insertion-ordered map from category key to assigned visual color.
/// Grows monotonically; existing keys are never reassigned.
pub type NamedColors = IndexMap<String, String, RandomState>;

/// One entry of the declarative `charts` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesConfig {
    /// Declared chart type (`line`, `bar`, `scatter`, ...). Used only
    /// to label configuration errors.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub x: String,
    pub y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_domain: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Rendering-only styling; accepted and preserved, ignored here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<serde_json::Value>,
}

/// Declarative multi-chart configuration, as submitted by the caller.
/// `legend`, `animate` and `tipTimeFormat` belong to the rendering
/// layer and are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(default)]
    pub charts: Vec<SeriesConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip_time_format: Option<String>,
}

/// Normalized per-chart state. Created once per configuration and
/// mutated in place across updates: `color_index` and `data_set_names`
/// accumulate as new categories arrive and are never reset by data.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescriptor {
    /// Index of this definition in the configured `charts` list.
    pub id: usize,
    pub kind: Option<String>,
    pub x: String,
    pub y: String,
    pub size: Option<String>,
    pub color_category: Option<String>,
    /// Ordered palette; defaulted when the config names none.
    pub color_scale: Vec<String>,
    /// Optional fixed ordering pinning category keys to palette slots.
    pub color_domain: Vec<String>,
    /// Next unused palette slot. Persists across updates.
    pub color_index: usize,
    pub data_set_names: NamedColors,
    pub max_length: Option<usize>,
}

impl ChartDescriptor {
    fn from_config(id: usize, cfg: &SeriesConfig) -> Self {
        let color_scale = match &cfg.color_scale {
            Some(scale) if !scale.is_empty() => scale.clone(),
            _ => palette::default_palette(),
        };
        Self {
            id,
            kind: cfg.kind.clone(),
            x: cfg.x.clone(),
            y: cfg.y.clone(),
            size: cfg.size.clone(),
            color_category: cfg.color_category_name.clone(),
            color_scale,
            color_domain: cfg.color_domain.clone().unwrap_or_default(),
            color_index: 0,
            data_set_names: NamedColors::default(),
            max_length: cfg.max_length,
        }
    }

    /// Label used in configuration errors, e.g. `line chart 0`.
    pub fn label(&self) -> String {
        match &self.kind {
            Some(kind) => format!("{} chart {}", kind, self.id),
            None => format!("chart {}", self.id),
        }
    }

    /// Assigned color for a category key, if the key has been seen.
    pub fn color_of(&self, key: &str) -> Option<&str> {
        self.data_set_names.get(key).map(String::as_str)
    }

    /// Assign a palette color to a category key. Idempotent: a key
    /// that already holds a color keeps it unchanged. New keys take
    /// their fixed-domain slot when one is pinned, otherwise the next
    /// palette slot in arrival order, wrapping when the palette is
    /// exhausted.
    pub fn assign_color(&mut self, key: &str) -> &str {
        if self.data_set_names.contains_key(key) {
            return &self.data_set_names[key];
        }

        if self.color_index >= self.color_scale.len() {
            self.color_index = 0;
        }

        let color = match self.color_domain.iter().position(|k| k == key) {
            // Pinned past the palette end: fall back to the first
            // color rather than indexing out of bounds.
            Some(p) if p >= self.color_scale.len() => self.color_scale[0].clone(),
            Some(p) => self.color_scale[p].clone(),
            None => {
                let color = self.color_scale[self.color_index].clone();
                self.color_index += 1;
                color
            }
        };
        debug!("chart {}: category '{}' takes color {}", self.id, key, color);
        self.data_set_names.insert(key.to_string(), color);
        &self.data_set_names[key]
    }

    /// Bind the single unkeyed series (named after the `y` field) to
    /// the first palette color without consuming a palette slot.
    pub fn assign_unkeyed_color(&mut self) -> &str {
        if !self.data_set_names.contains_key(&self.y) {
            let color = self.color_scale[0].clone();
            let key = self.y.clone();
            self.data_set_names.insert(key, color);
        }
        &self.data_set_names[&self.y]
    }
}

/// Expand the declarative config into one descriptor per entry.
/// Runs once per true configuration change; callers must not rebuild
/// on identical re-submissions, or color continuity is lost.
pub fn build_chart_array(config: &ChartConfig) -> Vec<ChartDescriptor> {
    config
        .charts
        .iter()
        .enumerate()
        .map(|(id, cfg)| ChartDescriptor::from_config(id, cfg))
        .collect()
}
