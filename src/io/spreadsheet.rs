//! Spreadsheet export of a mosaic
//!
//! The workbook holds three sheets built from the same grid and palette:
//! - `Raw`: one `#rrggbb` string per brick, row = image row, column = image column
//! - `Conversion`: one lookup formula per brick resolving the hex color to a catalog code
//! - `Count`: one row per palette color with a tally formula over the `Raw` sheet
//!
//! Formulas carry precomputed results so the workbook reads correctly even in
//! viewers that never recalculate.

use crate::io::configuration::{
    CONVERSION_SHEET, COUNT_HEADERS, COUNT_SHEET, RAW_SHEET, SPREADSHEET_EXTENSION,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::mosaic::MosaicGrid;
use rust_xlsxwriter::utility::{row_col_to_cell, row_col_to_cell_absolute};
use rust_xlsxwriter::{Format, Formula, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};

type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Ensure a spreadsheet path ends in `.xlsx`
///
/// A path without an extension gets `.xlsx` appended.
///
/// # Errors
///
/// Returns an error if the path carries any other extension
pub fn normalize_spreadsheet_path(path: &Path) -> Result<PathBuf> {
    match path.extension().map(|ext| ext.to_string_lossy()) {
        None => Ok(path.with_extension(SPREADSHEET_EXTENSION)),
        Some(ext) if ext.eq_ignore_ascii_case(SPREADSHEET_EXTENSION) => Ok(path.to_path_buf()),
        Some(ext) => Err(invalid_parameter(
            "spreadsheet path",
            &path.display(),
            &format!("extension '.{ext}' is not supported, use .{SPREADSHEET_EXTENSION}"),
        )),
    }
}

/// Write the three-sheet workbook for `grid` to `path`
///
/// # Errors
///
/// Returns an error if the workbook cannot be built or written
pub fn export_spreadsheet(grid: &MosaicGrid, path: &Path) -> Result<()> {
    export_spreadsheet_with_progress(grid, path, |_| {})
}

/// Write the workbook, calling `on_row` after each mosaic row is laid out
///
/// # Errors
///
/// Returns an error if:
/// - The grid exceeds worksheet row or column limits
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn export_spreadsheet_with_progress<F>(grid: &MosaicGrid, path: &Path, on_row: F) -> Result<()>
where
    F: FnMut(usize),
{
    let wrap = |source: XlsxError| MosaicError::SpreadsheetExport {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = build_workbook(grid, on_row).map_err(wrap)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    workbook.save(path).map_err(wrap)
}

/// Lay out all sheets for `grid` in memory
///
/// # Errors
///
/// Returns an error if the grid exceeds worksheet limits
pub fn build_workbook<F>(grid: &MosaicGrid, mut on_row: F) -> XlsxResult<Workbook>
where
    F: FnMut(usize),
{
    let mut raw = Worksheet::new();
    raw.set_name(RAW_SHEET)?;
    let mut conversion = Worksheet::new();
    conversion.set_name(CONVERSION_SHEET)?;

    let palette_len = grid.palette().len();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let Some(color) = grid.color_at(row, col) else {
                continue;
            };
            let (sheet_row, sheet_col) = cell_position(row, col)?;

            raw.write_string(sheet_row, sheet_col, color.html())?;
            conversion.write_formula(
                sheet_row,
                sheet_col,
                Formula::new(conversion_formula(sheet_row, sheet_col, palette_len))
                    .set_result(color.code),
            )?;
        }
        on_row(row);
    }

    let count = count_sheet(grid)?;

    let mut workbook = Workbook::new();
    workbook.push_worksheet(raw);
    workbook.push_worksheet(conversion);
    workbook.push_worksheet(count);
    Ok(workbook)
}

/// Lookup formula for the conversion cell at `(row, col)`
///
/// Strips the `#` from the matching `Raw` cell and finds its catalog code in
/// the `Count` table.
pub fn conversion_formula(row: u32, col: u16, palette_len: usize) -> String {
    let last_row = palette_len + 1;
    format!(
        "=_xlfn.XLOOKUP(SUBSTITUTE({RAW_SHEET}!{},\"#\",\"\"),{COUNT_SHEET}!$C$2:$C${last_row},{COUNT_SHEET}!$B$2:$B${last_row})",
        row_col_to_cell(row, col)
    )
}

/// Tally formula for the count row at `sheet_row`, covering a `width` × `height` raw grid
///
/// # Errors
///
/// Returns an error if the grid exceeds worksheet limits
pub fn count_formula(sheet_row: u32, width: usize, height: usize) -> XlsxResult<String> {
    let (last_row, last_col) = cell_position(height.saturating_sub(1), width.saturating_sub(1))?;
    Ok(format!(
        "=COUNTIF({RAW_SHEET}!$A$1:{},\"#\"&{COUNT_SHEET}!{})",
        row_col_to_cell_absolute(last_row, last_col),
        row_col_to_cell(sheet_row, 2)
    ))
}

fn count_sheet(grid: &MosaicGrid) -> XlsxResult<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(COUNT_SHEET)?;

    let bold = Format::new().set_bold();
    for (col, header) in (0u16..).zip(COUNT_HEADERS) {
        sheet.write_string_with_format(0, col, header, &bold)?;
        sheet.set_column_width(col, header.len() as f64 + 2.0)?;
    }

    let bill = grid.bill_of_materials();
    let mut sheet_row = 0u32;
    for entry in &bill {
        sheet_row += 1;
        sheet.write_number(sheet_row, 0, entry.number as f64)?;
        sheet.write_string(sheet_row, 1, entry.color.code)?;
        sheet.write_string(sheet_row, 2, entry.color.hex())?;
        sheet.write_formula(
            sheet_row,
            3,
            Formula::new(count_formula(sheet_row, grid.width(), grid.height())?)
                .set_result(entry.count.to_string()),
        )?;
    }

    let total_row = sheet_row + 1;
    sheet.write_string_with_format(total_row, 2, "Total", &bold)?;
    sheet.write_formula_with_format(
        total_row,
        3,
        Formula::new(format!("=SUM(D2:D{total_row})")).set_result(grid.len().to_string()),
        &bold,
    )?;

    Ok(sheet)
}

fn cell_position(row: usize, col: usize) -> XlsxResult<(u32, u16)> {
    match (u32::try_from(row), u16::try_from(col)) {
        (Ok(sheet_row), Ok(sheet_col)) => Ok((sheet_row, sheet_col)),
        _ => Err(XlsxError::RowColumnLimitError),
    }
}
