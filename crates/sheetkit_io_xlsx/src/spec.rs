//! Shared table/text specification models.

use std::collections::BTreeMap;

////////////////////////////////////////////////////////////////////////////////
// #region StyleSpecification

/// One border edge: line code (`0`..`13`) plus optional color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecBorderEdge {
    /// Border line code; `0` none, `1` thin, `2` medium, ...
    pub line: i64,
    /// Border color as a hex string.
    pub color: Option<String>,
}

/// Explicit per-side border overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecBorderSides {
    /// Top edge.
    pub top: Option<SpecBorderEdge>,
    /// Bottom edge.
    pub bottom: Option<SpecBorderEdge>,
    /// Left edge.
    pub left: Option<SpecBorderEdge>,
    /// Right edge.
    pub right: Option<SpecBorderEdge>,
}

/// Alignment facet with stringly horizontal/vertical keywords.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecAlignStyle {
    /// Horizontal alignment keyword (`left`, `center`, `right`, ...).
    pub horizontal: Option<String>,
    /// Vertical alignment keyword (`top`, `vcenter`, `bottom`, ...).
    pub vertical: Option<String>,
    /// Text wrap.
    pub text_wrap: Option<bool>,
}

/// Font facet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecFontStyle {
    /// Font family name.
    pub name: Option<String>,
    /// Font size in points.
    pub size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Italic style.
    pub italic: Option<bool>,
    /// Font color as a hex string.
    pub color: Option<String>,
}

/// Declarative cell style. Absent facets leave the target cell untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecCellStyle {
    /// One edge spec applied to all four borders.
    pub border_all: Option<SpecBorderEdge>,
    /// Explicit per-side borders; replaces `border_all` wholesale when set.
    pub border: Option<SpecBorderSides>,
    /// Alignment facet.
    pub alignment: Option<SpecAlignStyle>,
    /// Solid background fill color as a hex string.
    pub fill: Option<String>,
    /// Font facet.
    pub font: Option<SpecFontStyle>,
    /// Number format code.
    pub num_format: Option<String>,
}

impl SpecCellStyle {
    /// Return a new style by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellStyle) -> SpecCellStyle {
        self.merge(&patch)
    }

    /// Merge two styles with right-side non-`None` facet overwrite semantics.
    ///
    /// Overrides happen per facet: a facet present on `other` replaces the
    /// whole facet, an absent facet keeps the `self` value. `border_all` and
    /// `border` together form the single border property: either one present
    /// on `other` replaces both border fields of `self`.
    pub fn merge(&self, other: &SpecCellStyle) -> SpecCellStyle {
        let (border_all, border) = if other.border_all.is_some() || other.border.is_some() {
            (other.border_all.clone(), other.border.clone())
        } else {
            (self.border_all.clone(), self.border.clone())
        };

        SpecCellStyle {
            border_all,
            border,
            alignment: other.alignment.clone().or_else(|| self.alignment.clone()),
            fill: other.fill.clone().or_else(|| self.fill.clone()),
            font: other.font.clone().or_else(|| self.font.clone()),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellSpecification

/// Value carried by one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Bool(bool),
}

/// Header cell: a bare label or a spanning cell.
///
/// A `Label` that trims to empty is a placeholder reserving one column
/// without writing anything.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumHeaderCell {
    /// Bare label, one column wide.
    Label(String),
    /// Label spanning `colspan` columns and `rowspan` rows.
    Spanned {
        /// Header text.
        value: String,
        /// Column span; floored at 1.
        colspan: usize,
        /// Row span; floored at 1.
        rowspan: usize,
    },
}

impl EnumHeaderCell {
    /// Bare label cell.
    pub fn label(value: impl Into<String>) -> EnumHeaderCell {
        EnumHeaderCell::Label(value.into())
    }

    /// Spanning label cell.
    pub fn spanned(value: impl Into<String>, colspan: usize, rowspan: usize) -> EnumHeaderCell {
        EnumHeaderCell::Spanned {
            value: value.into(),
            colspan,
            rowspan,
        }
    }

    /// Return `(colspan, rowspan)`, both floored at 1.
    pub fn spans(&self) -> (usize, usize) {
        match self {
            EnumHeaderCell::Label(_) => (1, 1),
            EnumHeaderCell::Spanned {
                colspan, rowspan, ..
            } => (usize::max(*colspan, 1), usize::max(*rowspan, 1)),
        }
    }

    /// Whether this cell reserves space without writing a value.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, EnumHeaderCell::Label(value) if value.trim().is_empty())
    }

    /// Header text.
    pub fn text(&self) -> &str {
        match self {
            EnumHeaderCell::Label(value) => value,
            EnumHeaderCell::Spanned { value, .. } => value,
        }
    }
}

/// Header block: a single row or an ordered grid of rows, top row first.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumHeaderGrid {
    /// One header row.
    Row(Vec<EnumHeaderCell>),
    /// Multiple header rows.
    Grid(Vec<Vec<EnumHeaderCell>>),
}

impl EnumHeaderGrid {
    /// Normalize to a list of rows.
    pub fn rows(&self) -> Vec<&[EnumHeaderCell]> {
        match self {
            EnumHeaderGrid::Row(row) => vec![row.as_slice()],
            EnumHeaderGrid::Grid(grid) => grid.iter().map(|row| row.as_slice()).collect(),
        }
    }

    /// Outer sequence length: cells for `Row`, rows for `Grid`.
    ///
    /// Feeds the extent column fields, which keep this keying even for
    /// multi-row grids (see [`SpecTableExtent`]).
    pub fn outer_len(&self) -> usize {
        match self {
            EnumHeaderGrid::Row(row) => row.len(),
            EnumHeaderGrid::Grid(grid) => grid.len(),
        }
    }
}

/// Data cell: a bare value or a spanning cell with an inline style.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumDataCell {
    /// Bare value, one column wide.
    Plain(EnumCellValue),
    /// Value spanning `colspan` columns and `rowspan` rows.
    Spanned {
        /// Cell value.
        value: EnumCellValue,
        /// Column span; floored at 1.
        colspan: usize,
        /// Row span; floored at 1.
        rowspan: usize,
        /// Inline style; highest precedence in the style chain.
        style: Option<SpecCellStyle>,
    },
}

/// Header block plus ordered data rows for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecTableColumns {
    /// Header grid, top row first.
    pub headers: EnumHeaderGrid,
    /// Data rows in order.
    pub rows: Vec<Vec<EnumDataCell>>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableConfiguration

/// Style sources consulted while laying out a table.
///
/// Column and cell override keys use the column offset *after* the keyed cell
/// has advanced the row cursor, not the cell's starting column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecTableConfig {
    /// Style applied to every written header cell.
    pub style_header: Option<SpecCellStyle>,
    /// Base style for every data cell; lowest precedence.
    pub style_cell: Option<SpecCellStyle>,
    /// Per-column overrides keyed by post-advance column offset.
    pub styles_by_column: BTreeMap<usize, SpecCellStyle>,
    /// Per-cell overrides keyed by `(data row index, post-advance offset)`.
    pub styles_by_cell: BTreeMap<(usize, usize), SpecCellStyle>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region LayoutSpecification

/// One planned cell write: 1-based absolute anchor plus spans.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCellPlacement {
    /// Absolute 1-based row of the anchor cell.
    pub row_idx: usize,
    /// Absolute 1-based column of the anchor cell.
    pub col_idx: usize,
    /// Row span; a span above 1 produces a merge.
    pub n_rows_span: usize,
    /// Column span; a span above 1 produces a merge.
    pub n_cols_span: usize,
    /// Value written into the anchor cell.
    pub value: EnumCellValue,
    /// Fully resolved style chain for this cell.
    pub style: SpecCellStyle,
}

/// Bounding box returned to the caller after a table build.
///
/// Column fields derive from the header grid's outer length and the row
/// fields assume one header row; multi-row header grids keep that keying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTableExtent {
    /// First table column, 1-based.
    pub col_start: usize,
    /// First table row, 1-based.
    pub row_start: usize,
    /// `col_start + outer header length - 1`.
    pub col_end: usize,
    /// `row_start + data row count`.
    pub row_end: usize,
    /// Outer header length.
    pub n_cols_total: usize,
    /// Data row count plus one header row.
    pub n_rows_total: usize,
}

/// Fully planned table: placements in write order plus the extent.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecTableLayout {
    /// Header placements first, then data placements row by row.
    pub cells: Vec<SpecCellPlacement>,
    /// Caller-facing bounding box.
    pub extent: SpecTableExtent,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
