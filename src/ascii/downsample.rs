//! Area-average downsampling from pixels to character cells.

/// Average the luminance of every pixel inside each grid cell.
///
/// `gray` is row-major, one byte per pixel. Cells are mapped onto the image
/// with fractional bounds so that the whole image is covered even when the
/// sizes do not divide evenly; a cell narrower than one pixel still samples
/// the pixel it falls on.
///
/// # Returns
/// The number of brightness values written to `buffer`
/// (`grid_cols * grid_rows`, or 0 for degenerate input).
pub fn downsample_into(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    grid_cols: u16,
    grid_rows: u16,
    buffer: &mut Vec<u8>,
) -> usize {
    buffer.clear();

    if grid_cols == 0 || grid_rows == 0 || img_width == 0 || img_height == 0 || gray.is_empty() {
        return 0;
    }

    let output_size = (grid_cols as usize) * (grid_rows as usize);
    buffer.reserve(output_size);

    let cell_w = img_width as f32 / grid_cols as f32;
    let cell_h = img_height as f32 / grid_rows as f32;

    for cy in 0..grid_rows {
        let start_y = (cy as f32 * cell_h) as u32;
        let end_y = (((cy + 1) as f32 * cell_h) as u32).max(start_y + 1).min(img_height);

        for cx in 0..grid_cols {
            let start_x = (cx as f32 * cell_w) as u32;
            let end_x = (((cx + 1) as f32 * cell_w) as u32).max(start_x + 1).min(img_width);

            let mut sum = 0u32;
            let mut count = 0u32;

            for py in start_y..end_y {
                let row = (py * img_width) as usize;
                for px in start_x..end_x {
                    if let Some(&v) = gray.get(row + px as usize) {
                        sum += v as u32;
                        count += 1;
                    }
                }
            }

            buffer.push(if count > 0 { (sum / count) as u8 } else { 0 });
        }
    }

    output_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averages_quadrants() {
        // 4x2 image, left half 0, right half 200
        let gray = vec![0, 0, 200, 200, 0, 0, 200, 200];
        let mut out = Vec::new();
        assert_eq!(downsample_into(&gray, 4, 2, 2, 1, &mut out), 2);
        assert_eq!(out, vec![0, 200]);
    }

    #[test]
    fn test_upsampling_repeats_pixels() {
        let gray = vec![10, 250];
        let mut out = Vec::new();
        downsample_into(&gray, 2, 1, 4, 2, &mut out);
        assert_eq!(out, vec![10, 10, 250, 250, 10, 10, 250, 250]);
    }

    #[test]
    fn test_degenerate_input_is_empty() {
        let mut out = vec![1, 2, 3];
        assert_eq!(downsample_into(&[], 4, 4, 2, 2, &mut out), 0);
        assert!(out.is_empty());
        assert_eq!(downsample_into(&[1, 2], 2, 1, 0, 1, &mut out), 0);
    }
}
