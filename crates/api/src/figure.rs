// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chart specifications in the JSON shape Plotly.js draws directly.
//!
//! Only the attributes the dashboard sets are modelled. Unset optional
//! attributes are left out of the JSON so Plotly applies its own defaults.

use serde::{Deserialize, Serialize};

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Returns whether the figure has no data points to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Trace::is_empty)
    }
}

/// One data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(ScatterTrace),
    Pie(PieTrace),
}

impl Trace {
    /// Returns whether the trace has no data points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bar(trace) => trace.x.is_empty(),
            Self::Scatter(trace) => trace.x.is_empty(),
            Self::Pie(trace) => trace.labels.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    pub marker: Marker,
}

/// A line chart is a scatter trace drawn with lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub x: Vec<String>,
    pub y: Vec<u64>,
    pub mode: String,
    pub name: String,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub textinfo: String,
    pub marker: Marker,
}

/// Marker styling. Pie traces colour slices with `colors`; the other
/// traces use a single `color`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub font: Option<Font>,
}

impl Title {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: None,
        }
    }

    /// A title with an explicit font size.
    #[must_use]
    pub fn sized(text: &str, size: u32) -> Self {
        Self {
            text: text.to_string(),
            font: Some(Font {
                family: None,
                size: Some(size),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tickangle: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<u32>,
}
