//! Card rasterization: cell frames and wrapped, centered tile text.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::layout::{CellRect, GridLayout};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Render one card to an RGB image.
///
/// Inputs are read-only; rendering cannot fail once the layout and tiles
/// have been validated, so this is safe to run on parallel workers.
#[must_use]
pub fn render_card(
    layout: &GridLayout,
    tiles: &[String],
    font: &FontVec,
    font_size: u32,
    wrap_budget: usize,
) -> RgbImage {
    debug_assert_eq!(tiles.len(), layout.cell_count());

    let (width, height) = layout.board_area();
    let mut img = RgbImage::from_pixel(width, height, WHITE);

    draw_frames(&mut img, layout);

    #[allow(clippy::cast_precision_loss)]
    let scale = PxScale::from(font_size as f32);
    for (i, text) in tiles.iter().enumerate() {
        draw_tile_text(&mut img, layout.rect_for_1d(i), text, font, scale, wrap_budget);
    }

    img
}

/// Stroke every gridline.
///
/// Each cell strokes `outline` rings outward into its reserved gap, which
/// fills the single-width interior lines. The content-area boundary is then
/// stroked `2 * outline` rings inward so the outer edge comes out doubled.
fn draw_frames(img: &mut RgbImage, layout: &GridLayout) {
    let outline = layout.outline();

    for i in 0..layout.cell_count() {
        let r = layout.rect_for_1d(i);
        for d in 1..=outline {
            let ring = Rect::at(to_i32(r.x1 - d), to_i32(r.y1 - d))
                .of_size(r.width() + 2 * d, r.height() + 2 * d);
            draw_hollow_rect_mut(img, ring, BLACK);
        }
    }

    let pos = layout.content_pos();
    for d in 0..outline * 2 {
        let ring = Rect::at(to_i32(pos.x1 + d), to_i32(pos.y1 + d))
            .of_size(pos.width() - 2 * d, pos.height() - 2 * d);
        draw_hollow_rect_mut(img, ring, BLACK);
    }
}

/// Draw wrapped text centered in a cell.
///
/// Horizontal centering uses the cell rectangle's own width for each line;
/// the block is vertically centered using the first line's measured height
/// as the line height.
fn draw_tile_text(
    img: &mut RgbImage,
    rect: CellRect,
    text: &str,
    font: &FontVec,
    scale: PxScale,
    wrap_budget: usize,
) {
    let lines = wrap_text(text, wrap_budget);
    let Some(first) = lines.first() else { return };

    let (_, line_height) = text_size(scale, font, first);
    let line_height = to_i32(line_height.max(1));

    let block_height = i32::try_from(lines.len()).unwrap_or(i32::MAX).saturating_mul(line_height);
    let mut y = to_i32(rect.y1) + to_i32(rect.height()) / 2 - block_height / 2;

    for line in &lines {
        let (line_width, _) = text_size(scale, font, line);
        let x = to_i32(rect.x1) + (to_i32(rect.width()) - to_i32(line_width)) / 2;
        draw_text_mut(img, BLACK, x, y, scale, font, line);
        y += line_height;
    }
}

/// Greedy word-wrap to a character budget.
///
/// Words longer than the budget are hard-split so no line ever exceeds it.
fn wrap_text(text: &str, budget: usize) -> Vec<String> {
    let budget = budget.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_long_word(word, budget) {
            let needed = if current.is_empty() {
                piece.chars().count()
            } else {
                current.chars().count() + 1 + piece.chars().count()
            };
            if needed > budget && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(piece);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split a single word into budget-sized chunks, returned as subslices.
fn split_long_word(word: &str, budget: usize) -> Vec<&str> {
    if word.chars().count() <= budget {
        return vec![word];
    }
    let mut pieces = Vec::new();
    let mut rest = word;
    while rest.chars().count() > budget {
        let split = rest.char_indices().nth(budget).map_or(rest.len(), |(i, _)| i);
        let (head, tail) = rest.split_at(split);
        pieces.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        pieces.push(rest);
    }
    pieces
}

#[allow(clippy::cast_possible_wrap)]
fn to_i32(v: u32) -> i32 {
    v as i32
}
