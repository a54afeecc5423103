//! `sheetkit_io_xlsx` v1:
//! Styled table and text placement helpers on top of `rust_xlsxwriter`.
//!
//! The crate owns layout only; workbook lifecycle, value typing and rendering
//! stay with the engine:
//! - `conf`   : constants and default presets
//! - `spec`   : specs/models/options
//! - `util`   : pure helper functions
//! - `writer` : table/text write kernel
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    N_LEN_COLUMN_ALPHABET, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, derive_default_table_config,
};
pub use spec::{
    EnumCellValue, EnumDataCell, EnumHeaderCell, EnumHeaderGrid, SpecAlignStyle, SpecBorderEdge,
    SpecBorderSides, SpecCellPlacement, SpecCellStyle, SpecFontStyle, SpecTableColumns,
    SpecTableConfig, SpecTableExtent, SpecTableLayout,
};
pub use util::{
    check_region_overlap, derive_cell_reference, derive_column_index, derive_column_label,
    parse_cell_reference,
};
pub use writer::{
    EnumTextAnchor, derive_rust_xlsx_format, plan_table_layout, write_table, write_text,
};
