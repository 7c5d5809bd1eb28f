//! Styled data tables with the guide's fixed visual treatment.
//!
//! Every table in the guide shares one look: a bold orange header row closed
//! off by a double rule, alternating white and near-white body rows, a grey
//! grid, and an orange outer border.  The look is not configurable; callers
//! only supply the cell grid and optional column width weights.

use genpdf::elements::{Paragraph, TableLayout};
use genpdf::error::{Error, ErrorKind};
use genpdf::render::Area;
use genpdf::style::{Color, Style};
use genpdf::{Element, Margins, Mm, Position};

use crate::palette;
use crate::shapes::pt;
use crate::styles::StyleSheet;

const HEADER_PAD_PT: f64 = 10.0;
const BODY_PAD_PT: f64 = 8.0;
const SIDE_PAD_PT: f64 = 8.0;

/// Background color of the given body row (row 0 is the first row after the
/// header).  Banding starts white and alternates for any row count.
pub fn band_color(body_row: usize) -> Color {
    if body_row % 2 == 0 {
        palette::WHITE
    } else {
        palette::PANEL
    }
}

/// A rectangular cell grid with the guide's table styling applied.
#[derive(Debug)]
pub struct GuideTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    weights: Vec<usize>,
}

impl GuideTable {
    /// Builds a table from a grid whose first row is the header.
    ///
    /// `weights` are relative column widths; when omitted all columns share
    /// the width evenly.  An empty grid, a ragged grid, or a weight list that
    /// does not match the column count is rejected.
    pub fn from_grid(grid: &[&[&str]], weights: Option<&[usize]>) -> Result<Self, Error> {
        let (header, body) = grid.split_first().ok_or_else(|| {
            Error::new("Table grid must contain a header row", ErrorKind::InvalidData)
        })?;
        let columns = header.len();
        if columns == 0 {
            return Err(Error::new(
                "Table header row must not be empty",
                ErrorKind::InvalidData,
            ));
        }
        for (index, row) in body.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::new(
                    format!(
                        "Table row {} has {} cells, expected {columns}",
                        index + 1,
                        row.len()
                    ),
                    ErrorKind::InvalidData,
                ));
            }
        }
        let weights = match weights {
            Some(weights) if weights.len() != columns => {
                return Err(Error::new(
                    format!(
                        "Table has {columns} columns but {} width weights",
                        weights.len()
                    ),
                    ErrorKind::InvalidData,
                ));
            }
            Some(weights) => weights.to_vec(),
            None => vec![1; columns],
        };
        Ok(Self {
            header: header.iter().map(|cell| (*cell).to_owned()).collect(),
            rows: body
                .iter()
                .map(|row| row.iter().map(|cell| (*cell).to_owned()).collect())
                .collect(),
            weights,
        })
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn body_row_count(&self) -> usize {
        self.rows.len()
    }

    /// Converts the grid into a renderable table element.
    pub fn into_element(self, styles: &StyleSheet) -> Result<TableLayout, Error> {
        let mut table = TableLayout::new(self.weights);
        table.set_cell_decorator(GuideCellDecorator::new());

        let header_spec = *styles.get("TableHeader")?;
        let mut row = table.row();
        for cell in self.header {
            row.push_element(
                Paragraph::new(cell)
                    .aligned(header_spec.alignment)
                    .styled(header_spec.style)
                    .padded(Margins::trbl(
                        pt(HEADER_PAD_PT),
                        pt(SIDE_PAD_PT),
                        pt(HEADER_PAD_PT),
                        pt(SIDE_PAD_PT),
                    )),
            );
        }
        row.push()?;

        let cell_spec = *styles.get("TableCell")?;
        for body_row in self.rows {
            let mut row = table.row();
            for cell in body_row {
                row.push_element(
                    Paragraph::new(cell)
                        .aligned(cell_spec.alignment)
                        .styled(cell_spec.style)
                        .padded(Margins::trbl(
                            pt(BODY_PAD_PT),
                            pt(SIDE_PAD_PT),
                            pt(BODY_PAD_PT),
                            pt(SIDE_PAD_PT),
                        )),
                );
            }
            row.push()?;
        }

        Ok(table)
    }
}

/// Cell decorator painting the guide's grid, borders and row banding.
///
/// Cell content is laid out before the decorator runs, so the banding for
/// shaded rows is drawn as a hatch strip inside the bottom padding zone where
/// it cannot collide with text.
struct GuideCellDecorator {
    num_columns: usize,
    num_rows: usize,
}

impl GuideCellDecorator {
    fn new() -> Self {
        Self {
            num_columns: 0,
            num_rows: 0,
        }
    }
}

impl genpdf::elements::CellDecorator for GuideCellDecorator {
    fn set_table_size(&mut self, num_columns: usize, num_rows: usize) {
        self.num_columns = num_columns;
        self.num_rows = num_rows;
    }

    fn decorate_cell(
        &mut self,
        column: usize,
        row: usize,
        _has_more: bool,
        area: Area<'_>,
        _style: Style,
    ) {
        let width = area.size().width;
        let row_height = area.size().height;
        let grid = Style::new().with_color(palette::GRID_GREY);
        let border = Style::new().with_color(palette::ORANGE);

        let hline = |y: Mm, style: Style| {
            area.draw_line(
                vec![Position::new(Mm::default(), y), Position::new(width, y)],
                style,
            );
        };
        let vline = |x: Mm, style: Style| {
            area.draw_line(
                vec![Position::new(x, Mm::default()), Position::new(x, row_height)],
                style,
            );
        };

        if row > 0 && band_color(row - 1) == palette::PANEL {
            let band = Style::new().with_color(palette::PANEL);
            let mut y = row_height - pt(BODY_PAD_PT - 2.0);
            while y < row_height - pt(1.0) {
                hline(y, band);
                y = y + pt(0.9);
            }
        }

        if row == 0 {
            hline(Mm::default(), border);
        }
        hline(row_height, grid);
        if column == 0 {
            vline(Mm::default(), grid);
        }
        vline(width, grid);

        // Outer border passes on top of the grid.
        if column == 0 {
            vline(Mm::default(), border);
            vline(pt(0.5), border);
        }
        if column + 1 == self.num_columns {
            vline(width, border);
            vline(width - pt(0.5), border);
        }
        if row + 1 == self.num_rows {
            hline(row_height, border);
            hline(row_height - pt(0.5), border);
        }

        // Double rule closing off the header band.
        if row == 0 {
            hline(row_height, border);
            hline(row_height - pt(1.0), border);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banding_alternates_from_the_first_body_row() {
        assert_eq!(band_color(0), palette::WHITE);
        assert_eq!(band_color(1), palette::PANEL);
        assert_eq!(band_color(2), palette::WHITE);
        assert_eq!(band_color(3), palette::PANEL);
    }

    #[test]
    fn single_body_row_is_white() {
        assert_eq!(band_color(0), palette::WHITE);
    }

    #[test]
    fn rectangular_grid_is_accepted() {
        let table = GuideTable::from_grid(
            &[
                &["Feature", "Description"],
                &["Stateful Firewall", "Full packet inspection"],
                &["Multi-WAN", "Load balancing and failover"],
            ],
            Some(&[120, 330]),
        )
        .unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.body_row_count(), 2);
    }

    #[test]
    fn ragged_grid_is_rejected() {
        let err = GuideTable::from_grid(
            &[&["A", "B"], &["only one cell"]],
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(GuideTable::from_grid(&[], None).is_err());
    }

    #[test]
    fn mismatched_weights_are_rejected() {
        let err = GuideTable::from_grid(&[&["A", "B"]], Some(&[100])).unwrap_err();
        assert!(err.to_string().contains("weights"));
    }
}
