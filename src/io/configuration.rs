//! Layout constants, font scales and runtime configuration defaults

// Default input and output locations, relative to the working directory
/// Element catalog read when no path is given
pub const DEFAULT_ELEMENTS_FILE: &str = "periodic_table.csv";
/// Word list read when no path is given
pub const DEFAULT_WORDS_FILE: &str = "word_list.txt";
/// Rendered image written when no path is given
pub const DEFAULT_OUTPUT_FILE: &str = "output.png";
/// Extension used for batch-rendered images
pub const OUTPUT_EXTENSION: &str = "png";

/// Number of CSV fields every catalog record must carry
pub const CATALOG_FIELD_COUNT: usize = 5;
/// Longest element symbol accepted in a catalog
pub const MAX_SYMBOL_LENGTH: usize = 3;

// Canvas dimensions
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1920;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 480;
/// Upper bound for either canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

// Tile geometry
/// Width of a single element tile
pub const TILE_WIDTH: u32 = 200;
/// Height of a single element tile
pub const TILE_HEIGHT: u32 = 240;
/// Horizontal gap between neighbouring tiles
pub const TILE_GAP: u32 = 20;
/// Thickness of the tile frame
pub const TILE_BORDER: u32 = 4;
/// Distance between the frame and any text
pub const TILE_PADDING: u32 = 12;

// Text scales, in multiples of the 5x7 glyph cell
/// Scale of the atomic number in the top-left corner
pub const NUMBER_SCALE: u32 = 3;
/// Scale of the element symbol
pub const SYMBOL_SCALE: u32 = 9;
/// Scale of the element name
pub const NAME_SCALE: u32 = 2;
/// Scale of the atomic mass
pub const MASS_SCALE: u32 = 2;
/// Vertical space between the symbol and the name
pub const NAME_SPACING: u32 = 14;

// Colors
/// Canvas background
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Tile interior
pub const TILE_FILL_COLOR: [u8; 4] = [236, 242, 250, 255];
/// Tile frame
pub const BORDER_COLOR: [u8; 4] = [32, 40, 56, 255];
/// All tile text
pub const TEXT_COLOR: [u8; 4] = [16, 20, 28, 255];

/// Fixed seed for reproducible random word choice
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
