use image::Rgb;

/// Display color for a board category code. The table is fixed; codes outside
/// it have no fallback color.
pub fn color_for(code: &str) -> Option<Rgb<u8>> {
    let rgb = match code {
        "1" => [255, 119, 34],
        "2" => [255, 255, 102],
        "3" => [119, 204, 51],
        "4" => [102, 170, 255],
        "5" => [51, 68, 255],
        "6" => [51, 51, 51],
        _ => return None,
    };
    Some(Rgb(rgb))
}
