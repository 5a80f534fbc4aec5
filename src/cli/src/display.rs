use itertools::Itertools;
use owo_colors::OwoColorize;
use rubik_core::{Color, Cube, cube::NET};

/// Draws the unfolded cube. Without color, falls back to the plain net of
/// color initials.
pub fn render(cube: &Cube, color: bool) -> String {
    if !color {
        return cube.to_string();
    }

    let mut out = String::new();
    for band in NET {
        for row in 0..3 {
            let line = band
                .iter()
                .map(|slot| match slot {
                    Some(face) => cube.facelets(*face)[row]
                        .iter()
                        .map(|&color| sticker(color))
                        .join(""),
                    None => " ".repeat(6),
                })
                .join(" ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

fn sticker(color: Color) -> String {
    let (r, g, b) = color.rgb();
    "  ".on_truecolor(r, g, b).to_string()
}
