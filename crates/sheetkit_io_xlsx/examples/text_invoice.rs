//! Invoice header blocks built with single-cell and merged text placements.

use rust_xlsxwriter::Workbook;
use sheetkit_io_xlsx::{
    EnumCellValue, EnumTextAnchor, SpecAlignStyle, SpecBorderEdge, SpecCellStyle, SpecFontStyle,
    write_text,
};

fn derive_bold_style() -> SpecCellStyle {
    SpecCellStyle {
        font: Some(SpecFontStyle {
            bold: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn main() -> Result<(), String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Invoice")
        .map_err(|err| format!("xlsx write error: {err}"))?;

    write_text(
        worksheet,
        &EnumTextAnchor::Range {
            start: "A1".to_string(),
            end: "C1".to_string(),
        },
        &EnumCellValue::String("Invoice #1024".to_string()),
        Some(&SpecCellStyle {
            alignment: Some(SpecAlignStyle {
                horizontal: Some("center".to_string()),
                vertical: Some("vcenter".to_string()),
                ..Default::default()
            }),
            font: Some(SpecFontStyle {
                bold: Some(true),
                size: Some(14),
                ..Default::default()
            }),
            fill: Some("E0F2FE".to_string()),
            border_all: Some(SpecBorderEdge {
                line: 1,
                color: Some("93C5FD".to_string()),
            }),
            ..Default::default()
        }),
    )?;

    write_text(
        worksheet,
        &EnumTextAnchor::Cell("A3".to_string()),
        &EnumCellValue::String("Customer".to_string()),
        Some(&derive_bold_style()),
    )?;
    write_text(
        worksheet,
        &EnumTextAnchor::Cell("B3".to_string()),
        &EnumCellValue::String("GadgetCo".to_string()),
        None,
    )?;
    write_text(
        worksheet,
        &EnumTextAnchor::Cell("A4".to_string()),
        &EnumCellValue::String("Amount".to_string()),
        Some(&derive_bold_style()),
    )?;
    write_text(
        worksheet,
        &EnumTextAnchor::Cell("B4".to_string()),
        &EnumCellValue::Number(2599.0),
        Some(&SpecCellStyle {
            num_format: Some("$#,##0.00".to_string()),
            ..Default::default()
        }),
    )?;

    workbook
        .save("text-example.xlsx")
        .map_err(|err| format!("xlsx write error: {err}"))?;
    println!("Text example saved to text-example.xlsx");
    Ok(())
}
