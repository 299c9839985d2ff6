/// English Metric Units per inch, the integer coordinate space PowerPoint and
/// Google Slides address slide geometry in.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// File extensions the planner treats as slide images, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "tiff"];
