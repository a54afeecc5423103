//! Table constants and default preset factories.

use crate::spec::{SpecAlignStyle, SpecBorderEdge, SpecCellStyle, SpecFontStyle, SpecTableConfig};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Radix of the bijective column-label alphabet (`A`..`Z`).
pub const N_LEN_COLUMN_ALPHABET: usize = 26;

/// Build a default table config: bold white centered header on a dark band,
/// thin-bordered vertically centered body cells.
pub fn derive_default_table_config() -> SpecTableConfig {
    SpecTableConfig {
        style_header: Some(SpecCellStyle {
            alignment: Some(SpecAlignStyle {
                horizontal: Some("center".to_string()),
                vertical: Some("vcenter".to_string()),
                ..Default::default()
            }),
            font: Some(SpecFontStyle {
                bold: Some(true),
                color: Some("FFFFFF".to_string()),
                ..Default::default()
            }),
            fill: Some("0F172A".to_string()),
            ..Default::default()
        }),
        style_cell: Some(SpecCellStyle {
            border_all: Some(SpecBorderEdge {
                line: 1,
                color: Some("CBD5F5".to_string()),
            }),
            alignment: Some(SpecAlignStyle {
                vertical: Some("vcenter".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}
