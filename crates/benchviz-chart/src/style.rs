// Dweve BenchViz - Benchmark Visualization Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Chart dimensions, fonts, and series presentation.

use benchviz_core::Case;
use plotters::style::RGBColor;

/// Series colors, one per latency case.
const BEST_COLOR: RGBColor = RGBColor(0, 128, 0); // green
const AVERAGE_COLOR: RGBColor = RGBColor(0, 0, 255); // blue
const WORST_COLOR: RGBColor = RGBColor(255, 0, 0); // red

/// The line color for one latency case.
///
/// Best is green, average blue, worst red.
pub fn case_color(case: Case) -> RGBColor {
    match case {
        Case::Best => BEST_COLOR,
        Case::Average => AVERAGE_COLOR,
        Case::Worst => WORST_COLOR,
    }
}

/// Chart layout and typography settings.
///
/// The defaults produce a 1200x600 standalone chart and 600x500 panels in
/// the combined figure.
///
/// # Examples
///
/// ```
/// use benchviz_chart::ChartStyle;
///
/// let style = ChartStyle::default();
/// assert_eq!(style.width, 1200);
/// assert_eq!(style.stroke_width, 2);
/// ```
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Standalone chart width in pixels.
    pub width: u32,
    /// Standalone chart height in pixels.
    pub height: u32,
    /// Width of each panel in the combined figure.
    pub panel_width: u32,
    /// Height of each panel in the combined figure.
    pub panel_height: u32,
    /// Caption font size for standalone charts and the combined suptitle.
    pub title_font_size: u32,
    /// Caption font size for panels in the combined figure.
    pub panel_title_font_size: u32,
    /// Axis description font size.
    pub axis_font_size: u32,
    /// Tick label font size.
    pub tick_font_size: u32,
    /// Legend font size.
    pub legend_font_size: u32,
    /// Series line width in pixels.
    pub stroke_width: u32,
    /// Marker radius in pixels.
    pub marker_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            panel_width: 600,
            panel_height: 500,
            title_font_size: 28,
            panel_title_font_size: 20,
            axis_font_size: 18,
            tick_font_size: 14,
            legend_font_size: 16,
            stroke_width: 2,
            marker_size: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let style = ChartStyle::default();
        assert_eq!((style.width, style.height), (1200, 600));
        assert_eq!((style.panel_width, style.panel_height), (600, 500));
    }

    #[test]
    fn test_default_typography() {
        let style = ChartStyle::default();
        assert!(style.title_font_size > style.panel_title_font_size);
        assert!(style.axis_font_size > style.tick_font_size);
    }

    #[test]
    fn test_case_colors_are_distinct() {
        let colors = [
            case_color(Case::Best),
            case_color(Case::Average),
            case_color(Case::Worst),
        ];
        assert_eq!(colors[0], RGBColor(0, 128, 0));
        assert_eq!(colors[1], RGBColor(0, 0, 255));
        assert_eq!(colors[2], RGBColor(255, 0, 0));
    }
}
