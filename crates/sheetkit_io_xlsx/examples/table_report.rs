//! Sales report with a merged two-row header and per-cell overrides.

use std::collections::BTreeMap;

use rust_xlsxwriter::Workbook;
use sheetkit_io_xlsx::{
    EnumCellValue, EnumDataCell, EnumHeaderCell, EnumHeaderGrid, SpecAlignStyle, SpecBorderEdge,
    SpecCellStyle, SpecFontStyle, SpecTableColumns, SpecTableConfig, derive_column_label,
    write_table,
};

fn derive_growth_cell(growth: f64, style: Option<SpecCellStyle>) -> EnumDataCell {
    EnumDataCell::Spanned {
        value: EnumCellValue::Number(growth),
        colspan: 1,
        rowspan: 1,
        style: Some(style.unwrap_or_default().with_(SpecCellStyle {
            num_format: Some("0.00%".to_string()),
            ..Default::default()
        })),
    }
}

fn main() -> Result<(), String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Sales Report")
        .map_err(|err| format!("xlsx write error: {err}"))?;

    let columns = SpecTableColumns {
        headers: EnumHeaderGrid::Grid(vec![
            vec![
                EnumHeaderCell::spanned("Region", 1, 2),
                EnumHeaderCell::spanned("Sales", 2, 1),
                EnumHeaderCell::spanned("Growth", 1, 2),
            ],
            vec![EnumHeaderCell::label("Q1"), EnumHeaderCell::label("Q2")],
        ]),
        rows: vec![
            vec![
                EnumDataCell::Plain(EnumCellValue::String("North".to_string())),
                EnumDataCell::Plain(EnumCellValue::Number(12000.0)),
                EnumDataCell::Plain(EnumCellValue::Number(13500.0)),
                derive_growth_cell(0.12, None),
            ],
            vec![
                EnumDataCell::Plain(EnumCellValue::String("South".to_string())),
                EnumDataCell::Plain(EnumCellValue::Number(9800.0)),
                EnumDataCell::Plain(EnumCellValue::Number(11250.0)),
                derive_growth_cell(0.18, None),
            ],
            vec![
                EnumDataCell::Plain(EnumCellValue::String("West".to_string())),
                EnumDataCell::Plain(EnumCellValue::Number(14300.0)),
                EnumDataCell::Plain(EnumCellValue::Number(15670.0)),
                derive_growth_cell(
                    0.09,
                    Some(SpecCellStyle {
                        font: Some(SpecFontStyle {
                            color: Some("FFFFFF".to_string()),
                            ..Default::default()
                        }),
                        fill: Some("F70202".to_string()),
                        ..Default::default()
                    }),
                ),
            ],
        ],
    };

    let config = SpecTableConfig {
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
        styles_by_column: BTreeMap::from([(
            1,
            SpecCellStyle {
                alignment: Some(SpecAlignStyle {
                    horizontal: Some("left".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )]),
        ..Default::default()
    };

    let extent = write_table(worksheet, 1, 1, &columns, Some(&config))?;
    println!(
        "Table spans columns {}..{} over {} rows",
        derive_column_label(extent.col_start)?,
        derive_column_label(extent.col_end)?,
        extent.n_rows_total,
    );

    workbook
        .save("table-example.xlsx")
        .map_err(|err| format!("xlsx write error: {err}"))?;
    println!("Table example saved to table-example.xlsx");
    Ok(())
}
