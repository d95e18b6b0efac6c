use tessel_engine::{Bitmap, Color, DeviceContext, FormatId, Point, Rect, Result};

/// 8×8 heart, row-major MSB-first.
const HEART: [u8; 8] = [0x66, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C, 0x18, 0x00];

/// Landed pieces, bottom row first. `#` is a filled cell.
const STACK: [&str; 4] = ["##.###", "#.####", "..##..", "...#.."];

/// Draws the demo into whatever size the target has. Small targets simply
/// clip away what does not fit.
pub fn render(ctx: &mut DeviceContext) -> Result<()> {
    let bounds = ctx.target().bounds();
    let fg = ctx.draw_color();

    ctx.clear_target();
    ctx.rect_outline(bounds, fg);

    let well = Rect::new(2, 2, (bounds.width / 3).max(8), bounds.height - 4);
    draw_well(ctx, well, fg)?;

    let panel = Rect::new(well.right() + 2, 2, bounds.right() - well.right() - 4, bounds.height - 4);
    let hole = Rect::new(
        panel.x + panel.width / 4,
        panel.y + panel.height / 4,
        panel.width / 2,
        panel.height / 2,
    );
    draw_hatch(ctx, panel, hole, fg)?;
    draw_badge(ctx, hole, fg)?;

    log::debug!("scene rendered into {}x{}", bounds.width, bounds.height);
    Ok(())
}

/// A tetris-style well: everything inside is scoped to the well's interior.
fn draw_well(ctx: &mut DeviceContext, well: Rect, fg: Color) -> Result<()> {
    ctx.rect_outline(well, fg);

    let inner = Rect::new(well.x + 1, well.y + 1, well.width - 2, well.height - 2);
    let cell = (inner.width / STACK[0].len() as i32).max(2);

    ctx.push_clip()?;
    ctx.intersect_clip(inner);
    for (row, line) in STACK.iter().enumerate() {
        let y = inner.bottom() - (row as i32 + 1) * cell;
        for (col, _) in line.char_indices().filter(|&(_, c)| c == '#') {
            let x = inner.x + col as i32 * cell;
            ctx.fill_rect(Rect::new(x, y, cell - 1, cell - 1), fg);
        }
    }
    // falling piece, partly above the well
    ctx.fill_rect(Rect::new(inner.x + cell * 2, inner.y - cell, cell * 2 - 1, cell * 2 - 1), fg);
    ctx.pop_clip();
    Ok(())
}

/// Diagonal hatching across `panel`, leaving `hole` untouched.
fn draw_hatch(ctx: &mut DeviceContext, panel: Rect, hole: Rect, fg: Color) -> Result<()> {
    ctx.push_clip()?;
    ctx.intersect_clip(panel);
    ctx.exclude_clip(hole)?;
    for k in (0..panel.width + panel.height).step_by(4) {
        let x = panel.x + k;
        ctx.draw_line(x, panel.y, x - panel.height, panel.bottom() - 1, fg);
    }
    ctx.pop_clip();
    Ok(())
}

/// Fills `hole` with a gradient and drops a masked sprite in the middle.
fn draw_badge(ctx: &mut DeviceContext, hole: Rect, fg: Color) -> Result<()> {
    let sprite = Bitmap::from_bytes(ctx.registry(), FormatId::MONO_IDEAL, 8, 8, HEART.to_vec())?;

    ctx.push_clip()?;
    ctx.intersect_clip(hole);
    ctx.rect_outline(hole, fg);
    ctx.gradient_inward(hole, fg, ctx.background_color());

    // unlit sprite pixels keep whatever is underneath
    let background = ctx.set_background_color(Color::TRANSPARENT);
    ctx.set_origin(hole.origin());
    ctx.bitblt((hole.width - 8) / 2, (hole.height - 8) / 2, &sprite);
    ctx.set_origin(Point::zero());
    ctx.set_background_color(background);

    ctx.pop_clip();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_engine::{ContextConfig, FrameLog};

    fn lit(ctx: &DeviceContext) -> usize {
        let b = ctx.target().bounds();
        (b.y..b.bottom())
            .flat_map(|y| (b.x..b.right()).map(move |x| (x, y)))
            .filter(|&(x, y)| ctx.get_pixel(x, y) == Some(ctx.draw_color()))
            .count()
    }

    #[test]
    fn renders_and_leaves_clip_balanced() {
        let mut ctx = DeviceContext::for_format(FormatId::MONO_VERTICAL, 128, 64, ContextConfig::default()).unwrap();
        render(&mut ctx).unwrap();

        assert_eq!(ctx.clip_depth(), 0);
        assert_eq!(ctx.clip_rects(), vec![Rect::new(0, 0, 128, 64)]);
        assert_eq!(ctx.background_color(), Color::BLACK);
        assert!(ctx.is_dirty());
        assert!(lit(&ctx) > 128 * 2);

        let mut sink = FrameLog::new();
        ctx.present(&mut sink).unwrap();
        assert!(!ctx.is_dirty());
    }

    #[test]
    fn tiny_targets_just_clip() {
        for (w, h) in [(1, 1), (9, 5), (40, 12)] {
            let mut ctx = DeviceContext::for_format(FormatId::MONO_IDEAL, w, h, ContextConfig::default()).unwrap();
            render(&mut ctx).unwrap();
            assert_eq!(ctx.clip_depth(), 0);
        }
    }
}
