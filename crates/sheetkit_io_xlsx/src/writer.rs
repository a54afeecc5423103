//! Table/text write kernel targeting a `rust_xlsxwriter` worksheet.

use std::collections::BTreeSet;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Worksheet, XlsxError};

use crate::conf::{N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX};
use crate::spec::{
    EnumCellValue, EnumDataCell, SpecCellPlacement, SpecCellStyle, SpecTableColumns,
    SpecTableConfig, SpecTableExtent, SpecTableLayout,
};
use crate::util::{check_region_overlap, parse_cell_reference};

////////////////////////////////////////////////////////////////////////////////
// #region TextPlacement

/// Target of one text placement: a single cell or a merged rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumTextAnchor {
    /// Single `A1`-style cell reference.
    Cell(String),
    /// Inclusive rectangle; `start` is the value-carrying anchor cell.
    Range {
        /// Top-left cell reference.
        start: String,
        /// Bottom-right cell reference.
        end: String,
    },
}

/// Write one value into a cell or merged region, then apply `style`.
///
/// A `Range` anchor merges the rectangle first; the value lands in its
/// top-left cell. A reversed range collapses to the anchor cell.
pub fn write_text(
    worksheet: &mut Worksheet,
    anchor: &EnumTextAnchor,
    value: &EnumCellValue,
    style: Option<&SpecCellStyle>,
) -> Result<(), String> {
    let style_resolved = style.cloned().unwrap_or_default();

    let (n_col, n_row, n_cols_span, n_rows_span) = match anchor {
        EnumTextAnchor::Cell(cell_ref) => {
            let (n_col, n_row) = parse_cell_reference(cell_ref)?;
            (n_col, n_row, 1, 1)
        }
        EnumTextAnchor::Range { start, end } => {
            let (n_col_start, n_row_start) = parse_cell_reference(start)?;
            let (n_col_end, n_row_end) = parse_cell_reference(end)?;
            (
                n_col_start,
                n_row_start,
                usize::max(1, (n_col_end + 1).saturating_sub(n_col_start)),
                usize::max(1, (n_row_end + 1).saturating_sub(n_row_start)),
            )
        }
    };

    apply_cell_placement(
        worksheet,
        &SpecCellPlacement {
            row_idx: n_row,
            col_idx: n_col,
            n_rows_span,
            n_cols_span,
            value: value.clone(),
            style: style_resolved,
        },
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableLayoutPlanning

/// Plan all cell placements for one table without touching a worksheet.
///
/// `col_anchor`/`row_anchor` are the 1-based top-left table coordinates.
/// The occupied set that steers header placement is allocated fresh per call.
pub fn plan_table_layout(
    col_anchor: usize,
    row_anchor: usize,
    columns: &SpecTableColumns,
    config: Option<&SpecTableConfig>,
) -> Result<SpecTableLayout, String> {
    if col_anchor < 1 {
        return Err("Anchor column must be a positive 1-based index.".to_string());
    }
    if row_anchor < 1 {
        return Err("Anchor row must be a positive 1-based index.".to_string());
    }

    let l_header_rows = columns.headers.rows();
    let n_rows_header = l_header_rows.len();

    let style_header = config
        .and_then(|cfg| cfg.style_header.clone())
        .unwrap_or_default();
    let style_cell_base = config
        .and_then(|cfg| cfg.style_cell.clone())
        .unwrap_or_default();

    let mut l_cells = Vec::new();
    let mut set_occupied: BTreeSet<(usize, usize)> = BTreeSet::new();

    for (n_idx_row, header_row) in l_header_rows.iter().enumerate() {
        let mut n_col_cursor = 0usize;

        for header in *header_row {
            let (n_colspan, n_rowspan) = header.spans();

            if header.is_placeholder() {
                n_col_cursor += n_colspan;
                continue;
            }

            // Probe rightwards until the whole rectangle is clear of cells
            // reserved by earlier rowspans.
            let mut n_col_start = n_col_cursor;
            while check_region_overlap(&set_occupied, n_idx_row, n_col_start, n_rowspan, n_colspan)
            {
                n_col_start += 1;
            }

            l_cells.push(SpecCellPlacement {
                row_idx: row_anchor + n_idx_row,
                col_idx: col_anchor + n_col_start,
                n_rows_span: n_rowspan,
                n_cols_span: n_colspan,
                value: EnumCellValue::String(header.text().to_string()),
                style: style_header.clone(),
            });

            // Reserve the rectangle's rows below the first so later header
            // rows skip over them.
            for n_row in 1..n_rowspan {
                for n_col in 0..n_colspan {
                    set_occupied.insert((n_idx_row + n_row, n_col_start + n_col));
                }
            }

            n_col_cursor = n_col_start + n_colspan;
        }
    }

    for (n_idx_row, data_row) in columns.rows.iter().enumerate() {
        let mut n_col_offset = 0usize;

        for cell in data_row {
            let n_row_abs = row_anchor + n_rows_header + n_idx_row;
            let n_col_abs = col_anchor + n_col_offset;

            let (value, n_colspan, n_rowspan, style_inline) = match cell {
                EnumDataCell::Plain(value) => (value.clone(), 1, 1, None),
                EnumDataCell::Spanned {
                    value,
                    colspan,
                    rowspan,
                    style,
                } => (
                    value.clone(),
                    usize::max(*colspan, 1),
                    usize::max(*rowspan, 1),
                    style.clone(),
                ),
            };

            // Override lookups key on the offset after this cell has advanced
            // the cursor, not on its starting column.
            n_col_offset += n_colspan;

            let mut style_resolved = style_cell_base.clone();
            if let Some(cfg) = config {
                if let Some(style_column) = cfg.styles_by_column.get(&n_col_offset) {
                    style_resolved = style_resolved.merge(style_column);
                }
                if let Some(style_override) = cfg.styles_by_cell.get(&(n_idx_row, n_col_offset)) {
                    style_resolved = style_resolved.merge(style_override);
                }
            }
            if let Some(style_inline) = &style_inline {
                style_resolved = style_resolved.merge(style_inline);
            }

            l_cells.push(SpecCellPlacement {
                row_idx: n_row_abs,
                col_idx: n_col_abs,
                n_rows_span: n_rowspan,
                n_cols_span: n_colspan,
                value,
                style: style_resolved,
            });
        }
    }

    let n_cols_outer = columns.headers.outer_len();
    let n_rows_data = columns.rows.len();

    Ok(SpecTableLayout {
        cells: l_cells,
        extent: SpecTableExtent {
            col_start: col_anchor,
            row_start: row_anchor,
            col_end: col_anchor + n_cols_outer - 1,
            row_end: row_anchor + n_rows_data,
            n_cols_total: n_cols_outer,
            n_rows_total: n_rows_data + 1,
        },
    })
}

/// Plan a table, then apply every placement to `worksheet`.
pub fn write_table(
    worksheet: &mut Worksheet,
    col_anchor: usize,
    row_anchor: usize,
    columns: &SpecTableColumns,
    config: Option<&SpecTableConfig>,
) -> Result<SpecTableExtent, String> {
    let layout = plan_table_layout(col_anchor, row_anchor, columns, config)?;

    for placement in &layout.cells {
        apply_cell_placement(worksheet, placement)?;
    }

    Ok(layout.extent)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WorksheetApplication

fn apply_cell_placement(
    worksheet: &mut Worksheet,
    placement: &SpecCellPlacement,
) -> Result<(), String> {
    let format = derive_rust_xlsx_format(&placement.style);
    let n_row = cast_row_num(placement.row_idx - 1)?;
    let n_col = cast_col_num(placement.col_idx - 1)?;

    if placement.n_rows_span > 1 || placement.n_cols_span > 1 {
        let n_row_end = cast_row_num(placement.row_idx + placement.n_rows_span - 2)?;
        let n_col_end = cast_col_num(placement.col_idx + placement.n_cols_span - 2)?;

        match &placement.value {
            EnumCellValue::String(val) => {
                worksheet
                    .merge_range(n_row, n_col, n_row_end, n_col_end, val, &format)
                    .map_err(derive_xlsx_error_text)?;
            }
            EnumCellValue::None => {
                worksheet
                    .merge_range(n_row, n_col, n_row_end, n_col_end, "", &format)
                    .map_err(derive_xlsx_error_text)?;
            }
            value => {
                // Non-string merged values: merge with a blank anchor, then
                // overwrite the anchor cell (the engine permits this).
                worksheet
                    .merge_range(n_row, n_col, n_row_end, n_col_end, "", &format)
                    .map_err(derive_xlsx_error_text)?;
                write_cell_with_format(worksheet, n_row, n_col, value, &format)?;
            }
        }
        return Ok(());
    }

    write_cell_with_format(worksheet, n_row, n_col, &placement.value, &format)
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_num: u32,
    col_num: u16,
    value: &EnumCellValue,
    format: &Format,
) -> Result<(), String> {
    match value {
        EnumCellValue::None => {
            worksheet
                .write_blank(row_num, col_num, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::String(val) => {
            worksheet
                .write_string_with_format(row_num, col_num, val, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Number(val) => {
            worksheet
                .write_number_with_format(row_num, col_num, *val, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Bool(val) => {
            worksheet
                .write_boolean_with_format(row_num, col_num, *val, format)
                .map_err(derive_xlsx_error_text)?;
        }
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FormatDerivation

/// Resolve a declarative style into one engine format.
///
/// The border fields form one property: explicit per-side borders replace
/// `border_all` wholesale, so `border_all` only applies when `border` is
/// absent.
pub fn derive_rust_xlsx_format(style: &SpecCellStyle) -> Format {
    let mut format = Format::new();

    if style.border.is_none()
        && let Some(edge) = &style.border_all
    {
        format = format.set_border(derive_format_border(edge.line));
        if let Some(color) = &edge.color {
            format = format.set_border_color(color.as_str());
        }
    }

    if let Some(sides) = &style.border {
        if let Some(edge) = &sides.top {
            format = format.set_border_top(derive_format_border(edge.line));
            if let Some(color) = &edge.color {
                format = format.set_border_top_color(color.as_str());
            }
        }
        if let Some(edge) = &sides.bottom {
            format = format.set_border_bottom(derive_format_border(edge.line));
            if let Some(color) = &edge.color {
                format = format.set_border_bottom_color(color.as_str());
            }
        }
        if let Some(edge) = &sides.left {
            format = format.set_border_left(derive_format_border(edge.line));
            if let Some(color) = &edge.color {
                format = format.set_border_left_color(color.as_str());
            }
        }
        if let Some(edge) = &sides.right {
            format = format.set_border_right(derive_format_border(edge.line));
            if let Some(color) = &edge.color {
                format = format.set_border_right_color(color.as_str());
            }
        }
    }

    if let Some(alignment) = &style.alignment {
        if let Some(val) = &alignment.horizontal
            && let Some(align) = derive_format_align(val)
        {
            format = format.set_align(align);
        }
        if let Some(val) = &alignment.vertical
            && let Some(align) = derive_format_align(val)
        {
            format = format.set_align(align);
        }
        if alignment.text_wrap.unwrap_or(false) {
            format = format.set_text_wrap();
        }
    }

    if let Some(color) = &style.fill {
        format = format.set_background_color(color.as_str());
    }

    if let Some(font) = &style.font {
        if let Some(val) = &font.name {
            format = format.set_font_name(val.clone());
        }
        if let Some(val) = font.size {
            format = format.set_font_size(val as f64);
        }
        if font.bold.unwrap_or(false) {
            format = format.set_bold();
        }
        if font.italic.unwrap_or(false) {
            format = format.set_italic();
        }
        if let Some(val) = &font.color {
            format = format.set_font_color(val.as_str());
        }
    }

    if let Some(val) = &style.num_format {
        format = format.set_num_format(val.clone());
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        0 => FormatBorder::None,
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        3 => FormatBorder::Dashed,
        4 => FormatBorder::Dotted,
        5 => FormatBorder::Thick,
        6 => FormatBorder::Double,
        7 => FormatBorder::Hair,
        8 => FormatBorder::MediumDashed,
        9 => FormatBorder::DashDot,
        10 => FormatBorder::MediumDashDot,
        11 => FormatBorder::DashDotDot,
        12 => FormatBorder::MediumDashDotDot,
        13 => FormatBorder::SlantDashDot,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "fill" => Some(FormatAlign::Fill),
        "justify" => Some(FormatAlign::Justify),
        "center_across" => Some(FormatAlign::CenterAcross),
        "distributed" => Some(FormatAlign::Distributed),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" | "middle" => Some(FormatAlign::VerticalCenter),
        "vjustify" | "vertical_justify" => Some(FormatAlign::VerticalJustify),
        "vdistributed" | "vertical_distributed" => Some(FormatAlign::VerticalDistributed),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    if value >= N_NROWS_EXCEL_MAX {
        return Err(format!("Row index {value} exceeds the Excel sheet limit."));
    }
    u32::try_from(value).map_err(|_| format!("Row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    if value >= N_NCOLS_EXCEL_MAX {
        return Err(format!(
            "Column index {value} exceeds the Excel sheet limit."
        ));
    }
    u16::try_from(value).map_err(|_| format!("Column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_xlsxwriter::Workbook;

    use super::*;
    use crate::conf::derive_default_table_config;
    use crate::spec::{EnumHeaderCell, EnumHeaderGrid};

    fn derive_columns_single_header(headers: Vec<EnumHeaderCell>) -> SpecTableColumns {
        SpecTableColumns {
            headers: EnumHeaderGrid::Row(headers),
            rows: vec![],
        }
    }

    #[test]
    fn test_header_colspan_places_next_cell_after_merge() {
        let columns = derive_columns_single_header(vec![
            EnumHeaderCell::spanned("A", 2, 1),
            EnumHeaderCell::label("B"),
        ]);

        let layout = plan_table_layout(1, 1, &columns, None).unwrap();

        assert_eq!(layout.cells.len(), 2);
        assert_eq!(layout.cells[0].col_idx, 1);
        assert_eq!(layout.cells[0].n_cols_span, 2);
        assert_eq!(layout.cells[1].col_idx, 3);
        assert_eq!(layout.cells[1].n_cols_span, 1);
    }

    #[test]
    fn test_header_rowspan_shifts_next_row_without_placeholder() {
        let columns = SpecTableColumns {
            headers: EnumHeaderGrid::Grid(vec![
                vec![EnumHeaderCell::spanned("X", 1, 2), EnumHeaderCell::label("Y")],
                vec![EnumHeaderCell::label("Z")],
            ]),
            rows: vec![],
        };

        let layout = plan_table_layout(1, 1, &columns, None).unwrap();

        let placement_z = layout
            .cells
            .iter()
            .find(|cell| cell.value == EnumCellValue::String("Z".to_string()))
            .unwrap();
        // Column 1 row 2 is reserved by the X rowspan; Z shifts right.
        assert_eq!(placement_z.row_idx, 2);
        assert_eq!(placement_z.col_idx, 2);
    }

    #[test]
    fn test_header_placeholder_reserves_column_without_writing() {
        let columns = derive_columns_single_header(vec![
            EnumHeaderCell::label(""),
            EnumHeaderCell::label("B"),
        ]);

        let layout = plan_table_layout(1, 1, &columns, None).unwrap();

        assert_eq!(layout.cells.len(), 1);
        assert_eq!(layout.cells[0].value, EnumCellValue::String("B".to_string()));
        assert_eq!(layout.cells[0].col_idx, 2);
    }

    #[test]
    fn test_header_anchor_offsets_are_applied() {
        let columns = derive_columns_single_header(vec![EnumHeaderCell::label("A")]);

        let layout = plan_table_layout(3, 5, &columns, None).unwrap();

        assert_eq!(layout.cells[0].col_idx, 3);
        assert_eq!(layout.cells[0].row_idx, 5);
    }

    #[test]
    fn test_data_colspan_advances_offset_and_keys_post_advance() {
        let style_column = SpecCellStyle {
            fill: Some("FFEECC".to_string()),
            ..Default::default()
        };
        let config = SpecTableConfig {
            styles_by_column: BTreeMap::from([(2, style_column)]),
            ..Default::default()
        };
        let columns = SpecTableColumns {
            headers: EnumHeaderGrid::Row(vec![
                EnumHeaderCell::label("H1"),
                EnumHeaderCell::label("H2"),
                EnumHeaderCell::label("H3"),
            ]),
            rows: vec![vec![
                EnumDataCell::Spanned {
                    value: EnumCellValue::Number(10.0),
                    colspan: 2,
                    rowspan: 1,
                    style: None,
                },
                EnumDataCell::Plain(EnumCellValue::Number(20.0)),
            ]],
        };

        let layout = plan_table_layout(1, 1, &columns, Some(&config)).unwrap();

        let placement_10 = &layout.cells[3];
        let placement_20 = &layout.cells[4];

        assert_eq!(placement_10.value, EnumCellValue::Number(10.0));
        assert_eq!(placement_10.col_idx, 1);
        assert_eq!(placement_10.n_cols_span, 2);
        assert_eq!(placement_20.value, EnumCellValue::Number(20.0));
        assert_eq!(placement_20.col_idx, 3);

        // The column override keyed by offset 2 lands on the first cell,
        // whose cursor advanced from 0 to 2.
        assert_eq!(placement_10.style.fill.as_deref(), Some("FFEECC"));
        assert_eq!(placement_20.style.fill, None);
    }

    #[test]
    fn test_data_style_chain_precedence() {
        let config = SpecTableConfig {
            style_cell: Some(SpecCellStyle {
                fill: Some("111111".to_string()),
                num_format: Some("0".to_string()),
                ..Default::default()
            }),
            styles_by_column: BTreeMap::from([(
                1,
                SpecCellStyle {
                    fill: Some("222222".to_string()),
                    ..Default::default()
                },
            )]),
            styles_by_cell: BTreeMap::from([(
                (0, 1),
                SpecCellStyle {
                    fill: Some("333333".to_string()),
                    ..Default::default()
                },
            )]),
            ..Default::default()
        };
        let columns = SpecTableColumns {
            headers: EnumHeaderGrid::Row(vec![EnumHeaderCell::label("H")]),
            rows: vec![vec![EnumDataCell::Spanned {
                value: EnumCellValue::String("v".to_string()),
                colspan: 1,
                rowspan: 1,
                style: Some(SpecCellStyle {
                    fill: Some("444444".to_string()),
                    ..Default::default()
                }),
            }]],
        };

        let layout = plan_table_layout(1, 1, &columns, Some(&config)).unwrap();
        let placement = &layout.cells[1];

        // Inline wins the fill; the untouched number format survives from
        // the base cell style.
        assert_eq!(placement.style.fill.as_deref(), Some("444444"));
        assert_eq!(placement.style.num_format.as_deref(), Some("0"));
    }

    #[test]
    fn test_inline_border_all_replaces_base_per_side_border() {
        let config = SpecTableConfig {
            style_cell: Some(SpecCellStyle {
                border: Some(crate::spec::SpecBorderSides {
                    top: Some(crate::spec::SpecBorderEdge {
                        line: 1,
                        color: None,
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let columns = SpecTableColumns {
            headers: EnumHeaderGrid::Row(vec![EnumHeaderCell::label("H")]),
            rows: vec![vec![EnumDataCell::Spanned {
                value: EnumCellValue::Number(1.0),
                colspan: 1,
                rowspan: 1,
                style: Some(SpecCellStyle {
                    border_all: Some(crate::spec::SpecBorderEdge {
                        line: 2,
                        color: None,
                    }),
                    ..Default::default()
                }),
            }]],
        };

        let layout = plan_table_layout(1, 1, &columns, Some(&config)).unwrap();
        let style_resolved = &layout.cells[1].style;

        // The inline `border_all` displaces the base style's thin top edge.
        assert_eq!(style_resolved.border, None);
        assert_eq!(
            style_resolved.border_all.as_ref().map(|edge| edge.line),
            Some(2)
        );
    }

    #[test]
    fn test_zero_anchor_column_fails_before_any_placement() {
        let columns = derive_columns_single_header(vec![EnumHeaderCell::label("A")]);

        assert!(plan_table_layout(0, 1, &columns, None).is_err());
        assert!(plan_table_layout(1, 0, &columns, None).is_err());

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        assert!(write_table(worksheet, 0, 1, &columns, None).is_err());
    }

    #[test]
    fn test_extent_keeps_outer_header_length_keying() {
        // Two header rows over three columns: the column fields intentionally
        // report the outer grid length, which is the row count here.
        let columns = SpecTableColumns {
            headers: EnumHeaderGrid::Grid(vec![
                vec![
                    EnumHeaderCell::spanned("Region", 1, 2),
                    EnumHeaderCell::spanned("Sales", 2, 1),
                ],
                vec![EnumHeaderCell::label("Q1"), EnumHeaderCell::label("Q2")],
            ]),
            rows: vec![
                vec![
                    EnumDataCell::Plain(EnumCellValue::String("North".to_string())),
                    EnumDataCell::Plain(EnumCellValue::Number(1.0)),
                    EnumDataCell::Plain(EnumCellValue::Number(2.0)),
                ],
            ],
        };

        let extent = plan_table_layout(1, 1, &columns, None).unwrap().extent;

        assert_eq!(extent.n_cols_total, 2);
        assert_eq!(extent.col_end, 2);
        assert_eq!(extent.row_end, 2);
        assert_eq!(extent.n_rows_total, 2);
    }

    #[test]
    fn test_multi_row_header_second_row_fills_free_columns() {
        // Region and Growth bleed into the second header row; Q1/Q2 slot into
        // the free middle columns without explicit placeholders.
        let columns = SpecTableColumns {
            headers: EnumHeaderGrid::Grid(vec![
                vec![
                    EnumHeaderCell::spanned("Region", 1, 2),
                    EnumHeaderCell::spanned("Sales", 2, 1),
                    EnumHeaderCell::spanned("Growth", 1, 2),
                ],
                vec![EnumHeaderCell::label("Q1"), EnumHeaderCell::label("Q2")],
            ]),
            rows: vec![],
        };

        let layout = plan_table_layout(1, 1, &columns, None).unwrap();

        let derive_placement = |text: &str| {
            layout
                .cells
                .iter()
                .find(|cell| cell.value == EnumCellValue::String(text.to_string()))
                .unwrap()
                .clone()
        };

        assert_eq!(derive_placement("Region").col_idx, 1);
        assert_eq!(derive_placement("Sales").col_idx, 2);
        assert_eq!(derive_placement("Growth").col_idx, 4);
        assert_eq!(derive_placement("Q1").col_idx, 2);
        assert_eq!(derive_placement("Q1").row_idx, 2);
        assert_eq!(derive_placement("Q2").col_idx, 3);
    }

    #[test]
    fn test_write_table_and_text_save_to_disk() {
        let dir_out = tempfile::tempdir().unwrap();
        let path_file_out = dir_out.path().join("table_smoke.xlsx");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        write_text(
            worksheet,
            &EnumTextAnchor::Range {
                start: "A1".to_string(),
                end: "C1".to_string(),
            },
            &EnumCellValue::String("Quarterly Report".to_string()),
            Some(&SpecCellStyle {
                font: Some(crate::spec::SpecFontStyle {
                    bold: Some(true),
                    size: Some(14),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        )
        .unwrap();

        let columns = SpecTableColumns {
            headers: EnumHeaderGrid::Row(vec![
                EnumHeaderCell::label("Item"),
                EnumHeaderCell::label("Total"),
            ]),
            rows: vec![vec![
                EnumDataCell::Plain(EnumCellValue::String("Widgets".to_string())),
                EnumDataCell::Spanned {
                    value: EnumCellValue::Number(2599.0),
                    colspan: 1,
                    rowspan: 2,
                    style: Some(SpecCellStyle {
                        num_format: Some("$#,##0.00".to_string()),
                        ..Default::default()
                    }),
                },
            ]],
        };
        let config = derive_default_table_config();

        let extent = write_table(worksheet, 1, 3, &columns, Some(&config)).unwrap();
        assert_eq!(extent.col_start, 1);
        assert_eq!(extent.row_start, 3);

        workbook.save(&path_file_out).unwrap();
        assert!(path_file_out.exists());
    }
}
