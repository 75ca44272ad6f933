//! Workflow constants and output naming defaults

// Output settings
/// Suffix added to the input file stem for the mosaic image
pub const OUTPUT_SUFFIX: &str = "_legomosaic";
/// Suffix added to the input file stem for the zoomed preview image
pub const PREVIEW_SUFFIX: &str = "_legomosaic_preview";
/// Extension of the mosaic and preview images
pub const IMAGE_EXTENSION: &str = "png";
/// Only spreadsheet format the exporter writes
pub const SPREADSHEET_EXTENSION: &str = "xlsx";

/// Scale factor of the nearest-neighbour preview image
pub const PREVIEW_ZOOM: u32 = 11;

// Spreadsheet layout
/// Sheet holding one `#rrggbb` string per brick
pub const RAW_SHEET: &str = "Raw";
/// Sheet resolving each brick to its catalog code
pub const CONVERSION_SHEET: &str = "Conversion";
/// Sheet listing every palette color with its tally
pub const COUNT_SHEET: &str = "Count";
/// Header row of the count sheet
pub const COUNT_HEADERS: [&str; 4] = [
    "Code Number",
    "Lego.com Index",
    "HTML Color Notation",
    "Count",
];

// Format limits of xlsx worksheets
/// Maximum number of columns in a worksheet
pub const MAX_SHEET_COLUMNS: u32 = 16_384;
/// Maximum number of rows in a worksheet
pub const MAX_SHEET_ROWS: u32 = 1_048_576;

/// Largest palette a mosaic grid can index
pub const MAX_PALETTE_SIZE: usize = 256;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Messages shown when the workflow ends
/// Shown when the workflow stops before the mosaic image is written
pub const NO_IMAGE_MESSAGE: &str = "Error: No image was created.";
/// Shown when the workflow stops before the spreadsheet is written
pub const NO_SPREADSHEET_MESSAGE: &str = "Error: No excel file was created.";
