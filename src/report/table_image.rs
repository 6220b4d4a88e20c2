//! @ai:module:intent Rendered PNG results table (summary counts plus per-model metrics)
//! @ai:module:layer infrastructure
//! @ai:module:public_api TableImageReporter, ResultsTable, is_emphasized, EMPHASIZED_VALUES
//! @ai:module:stateless true

use crate::model::DISPLAY_ORDER;
use crate::results::ResultsCollection;
use crate::stats::keys;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Percentages highlighted in the rendered table.
pub const EMPHASIZED_VALUES: [&str; 4] = ["100.0%", "93.3%", "90.0%", "80.0%"];

const ERROR_CELL: &str = "ERROR";
const DEFAULT_RUNTIME: &str = "0:0:0";

pub const DETAIL_HEADERS: [&str; 6] = [
    "Model Architecture",
    "% Not-a-Dog\nCorrect",
    "% Dogs\nCorrect",
    "% Breeds\nCorrect",
    "% Match\nLabels",
    "Total Elapsed\nRuntime",
];

/// Percentage columns of the detail table, after the model name.
const DETAIL_KEYS: [&str; 4] = [
    keys::PCT_CORRECT_NOTDOGS,
    keys::PCT_CORRECT_DOGS,
    keys::PCT_CORRECT_BREED,
    keys::PCT_MATCH,
];

/// @ai:intent Whether a cell value gets bold blue emphasis
/// @ai:effects pure
pub fn is_emphasized(text: &str) -> bool {
    EMPHASIZED_VALUES.contains(&text)
}

/// @ai:intent Cell text of both tables, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    pub summary: Vec<(String, String)>,
    pub rows: Vec<Vec<String>>,
}

impl ResultsTable {
    /// @ai:intent Lay out the summary and detail tables
    /// @ai:post None when no run produced results
    /// @ai:effects pure
    pub fn build(results: &ResultsCollection) -> Option<Self> {
        // Every run classifies the same image set, so any successful run supplies the counts.
        let (_, sample) = results.first_present()?;

        let summary = vec![
            ("# Total Images".to_string(), sample.count_or_zero(keys::N_IMAGES).to_string()),
            ("# Dog Images".to_string(), sample.count_or_zero(keys::N_DOGS).to_string()),
            ("# Not-a-Dog Images".to_string(), sample.count_or_zero(keys::N_NOTDOGS).to_string()),
        ];

        let rows = DISPLAY_ORDER
            .iter()
            .map(|&model| {
                let name = model.display_name().to_string();

                match results.get(model) {
                    Some(stats) => {
                        let mut row = vec![name];
                        row.extend(DETAIL_KEYS.iter().map(|key| match stats.get(key) {
                            Some(value) if value.as_f64().is_some() => {
                                format!("{:.1}%", stats.value_or_zero(key))
                            }
                            Some(value) => value.to_string(),
                            None => format!("{:.1}%", 0.0),
                        }));
                        row.push(stats.runtime().unwrap_or(DEFAULT_RUNTIME).to_string());
                        row
                    }
                    None => {
                        let mut row = vec![name];
                        row.extend(std::iter::repeat(ERROR_CELL.to_string()).take(5));
                        row
                    }
                }
            })
            .collect();

        Some(Self { summary, rows })
    }
}

/// @ai:intent Renders the results table image
pub struct TableImageReporter;

impl TableImageReporter {
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Build and draw the table, overwriting any previous image
    /// @ai:post Ok(None) when nothing was drawn (no results, or rendering unavailable)
    /// @ai:effects fs:write
    pub fn generate(&self, results: &ResultsCollection, output_path: &Path) -> Result<Option<PathBuf>> {
        let Some(table) = ResultsTable::build(results) else {
            println!("No valid results to display");
            return Ok(None);
        };

        self.draw(&table, output_path)
    }

    #[cfg(feature = "visual")]
    fn draw(&self, table: &ResultsTable, output_path: &Path) -> Result<Option<PathBuf>> {
        render::draw_table(table, output_path)?;
        println!("\nVisual results table saved as: {}", output_path.display());
        Ok(Some(output_path.to_path_buf()))
    }

    #[cfg(not(feature = "visual"))]
    fn draw(&self, _table: &ResultsTable, _output_path: &Path) -> Result<Option<PathBuf>> {
        println!("Table rendering not available. Skipping visual table creation.");
        Ok(None)
    }
}

impl Default for TableImageReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "visual")]
mod render {
    use super::{is_emphasized, ResultsTable, DETAIL_HEADERS};
    use anyhow::Result;
    use plotters::coord::Shift;
    use plotters::prelude::*;
    use plotters::style::text_anchor::{HPos, Pos, VPos};
    use std::path::Path;

    type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

    const WIDTH: u32 = 1600;
    const HEIGHT: u32 = 1000;

    const HEADER_FILL: RGBColor = RGBColor(0xe6, 0xe6, 0xe6);
    const LABEL_FILL: RGBColor = RGBColor(0xf0, 0xf0, 0xf0);
    static ROW_FILLS: [RGBColor; 3] = [
        WHITE,
        RGBColor(0xf9, 0xf9, 0xf9),
        RGBColor(0xf0, 0xf0, 0xf0),
    ];

    const SUMMARY_LEFT: i32 = 240;
    const SUMMARY_SPLIT: i32 = 640;
    const SUMMARY_RIGHT: i32 = 880;
    const SUMMARY_TOP: i32 = 100;
    const SUMMARY_ROW_HEIGHT: i32 = 56;

    const DETAIL_LEFT: i32 = 80;
    const DETAIL_COL_WIDTH: i32 = 240;
    const DETAIL_TOP: i32 = 340;
    const DETAIL_HEADER_HEIGHT: i32 = 100;
    const DETAIL_ROW_HEIGHT: i32 = 90;

    struct CellStyle<'c> {
        fill: &'c RGBColor,
        color: &'c RGBColor,
        font_size: u32,
        bold: bool,
        align: HPos,
    }

    fn draw_text(area: &Area, text: &str, at: (i32, i32), font_size: u32) -> Result<()> {
        let style = ("sans-serif", font_size)
            .into_font()
            .style(FontStyle::Bold)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(text.to_string(), at, style))?;
        Ok(())
    }

    /// @ai:intent Fill, outline and label one cell; newlines split the label over lines
    fn draw_cell(area: &Area, corners: [(i32, i32); 2], text: &str, style: &CellStyle) -> Result<()> {
        let [(x0, y0), (x1, y1)] = corners;
        area.draw(&Rectangle::new(corners, style.fill.filled()))?;
        area.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;

        let font = ("sans-serif", style.font_size).into_font();
        let font = if style.bold { font.style(FontStyle::Bold) } else { font };
        let text_style = font.color(style.color).pos(Pos::new(style.align, VPos::Center));

        let x = match style.align {
            HPos::Left => x0 + 14,
            HPos::Right => x1 - 14,
            HPos::Center => (x0 + x1) / 2,
        };

        let lines: Vec<&str> = text.lines().collect();
        let line_height = style.font_size as i32 + 6;
        let mut y = (y0 + y1) / 2 - (line_height * (lines.len() as i32 - 1)) / 2;

        for line in lines {
            area.draw(&Text::new(line.to_string(), (x, y), text_style.clone()))?;
            y += line_height;
        }

        Ok(())
    }

    fn draw_summary(area: &Area, table: &ResultsTable) -> Result<()> {
        for (i, (label, value)) in table.summary.iter().enumerate() {
            let top = SUMMARY_TOP + i as i32 * SUMMARY_ROW_HEIGHT;
            let bottom = top + SUMMARY_ROW_HEIGHT;

            let label_style = CellStyle {
                fill: &LABEL_FILL,
                color: &BLACK,
                font_size: 26,
                bold: true,
                align: HPos::Left,
            };
            draw_cell(area, [(SUMMARY_LEFT, top), (SUMMARY_SPLIT, bottom)], label, &label_style)?;

            let value_style = CellStyle { fill: &WHITE, ..label_style };
            draw_cell(area, [(SUMMARY_SPLIT, top), (SUMMARY_RIGHT, bottom)], value, &value_style)?;
        }

        Ok(())
    }

    fn draw_details(area: &Area, table: &ResultsTable) -> Result<()> {
        let column = |j: usize| {
            let left = DETAIL_LEFT + j as i32 * DETAIL_COL_WIDTH;
            (left, left + DETAIL_COL_WIDTH)
        };

        let header_style = CellStyle {
            fill: &HEADER_FILL,
            color: &BLACK,
            font_size: 22,
            bold: true,
            align: HPos::Center,
        };
        for (j, header) in DETAIL_HEADERS.iter().enumerate() {
            let (left, right) = column(j);
            let corners = [(left, DETAIL_TOP), (right, DETAIL_TOP + DETAIL_HEADER_HEIGHT)];
            draw_cell(area, corners, header, &header_style)?;
        }

        for (i, row) in table.rows.iter().enumerate() {
            let top = DETAIL_TOP + DETAIL_HEADER_HEIGHT + i as i32 * DETAIL_ROW_HEIGHT;
            let bottom = top + DETAIL_ROW_HEIGHT;

            for (j, text) in row.iter().enumerate() {
                let (left, right) = column(j);
                let style = if j == 0 {
                    CellStyle {
                        fill: &HEADER_FILL,
                        color: &BLACK,
                        font_size: 24,
                        bold: true,
                        align: HPos::Center,
                    }
                } else {
                    let emphasized = is_emphasized(text);
                    CellStyle {
                        fill: &ROW_FILLS[i % ROW_FILLS.len()],
                        color: if emphasized { &BLUE } else { &BLACK },
                        font_size: 22,
                        bold: emphasized,
                        align: HPos::Center,
                    }
                };
                draw_cell(area, [(left, top), (right, bottom)], text, &style)?;
            }
        }

        Ok(())
    }

    /// @ai:intent Draw both tables with title and footer into a PNG
    /// @ai:effects fs:write
    pub fn draw_table(table: &ResultsTable, output_path: &Path) -> Result<()> {
        let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        draw_text(&root, "Results Table", (WIDTH as i32 / 2, 50), 48)?;
        draw_summary(&root, table)?;
        draw_details(&root, table)?;
        draw_text(&root, "Project Results", (WIDTH as i32 / 2, HEIGHT as i32 - 80), 36)?;

        root.present()?;
        Ok(())
    }
}
