use crate::foundation::error::DocumentError;

/// File header (14) plus info header (40).
pub const HEADER_LEN: usize = 54;
const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: u32 = 40;
const BYTES_PER_PIXEL: usize = 4;

/// Wrap a top-down 32-bit pixel buffer in a minimal bottom-up bitmap container.
///
/// Rows are copied in reverse order (pixels within a row are untouched) and any stride
/// padding is dropped. All header integers are little-endian.
pub fn encode_bitmap_container(
    pixels: &[u8],
    stride: usize,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, DocumentError> {
    if width == 0 || height == 0 {
        return Err(DocumentError::Render(format!(
            "page bitmap is empty ({width}x{height})"
        )));
    }
    let row_len = (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(|| DocumentError::Render("bitmap row length overflows".into()))?;
    if stride < row_len {
        return Err(DocumentError::Render(format!(
            "stride {stride} is shorter than a {width}px row"
        )));
    }
    let needed = stride
        .checked_mul(height as usize - 1)
        .and_then(|n| n.checked_add(row_len))
        .ok_or_else(|| DocumentError::Render("bitmap buffer length overflows".into()))?;
    if pixels.len() < needed {
        return Err(DocumentError::Render(format!(
            "bitmap buffer holds {} bytes, {needed} required",
            pixels.len()
        )));
    }

    let image_size = row_len
        .checked_mul(height as usize)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| n.checked_add(HEADER_LEN as u32).is_some())
        .ok_or_else(|| DocumentError::Render("bitmap exceeds 4 GiB".into()))?;
    let signed_width = i32::try_from(width)
        .map_err(|_| DocumentError::Render(format!("width {width} exceeds i32")))?;
    let signed_height = i32::try_from(height)
        .map_err(|_| DocumentError::Render(format!("height {height} exceeds i32")))?;

    let mut out = Vec::with_capacity(HEADER_LEN + image_size as usize);

    // File header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(HEADER_LEN as u32 + image_size).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());
    debug_assert_eq!(out.len(), FILE_HEADER_LEN);

    // Info header
    out.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    out.extend_from_slice(&signed_width.to_le_bytes());
    out.extend_from_slice(&signed_height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&32u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    debug_assert_eq!(out.len(), HEADER_LEN);

    for row in (0..height as usize).rev() {
        let start = row * stride;
        out.extend_from_slice(&pixels[start..start + row_len]);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/document/bitmap.rs"]
mod tests;
