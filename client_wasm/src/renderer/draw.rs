use game_core::{Arena, Paddle, PongSimulator, ServeRng};
use glam::Vec2;

use super::{Palette, Surface};

const NET_DASH: f32 = 15.0;
const NET_SPACING: f32 = 25.0;
const SCORE_BASELINE: f32 = 40.0;

/// Paint the whole scene: background, net, paddles, ball, then the score
pub fn draw_frame<S, R>(
    surface: &mut S,
    sim: &PongSimulator<R>,
    palette: &Palette,
) -> Result<(), String>
where
    S: Surface + ?Sized,
    R: ServeRng,
{
    let arena = sim.arena();

    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(arena.width, arena.height),
        palette.background,
    )?;
    draw_net(surface, arena, palette.net)?;

    if let Some(player) = sim.player() {
        draw_paddle(surface, &player, palette.player)?;
    }
    if let Some(ai) = sim.ai() {
        draw_paddle(surface, &ai, palette.ai)?;
    }
    if let Some(ball) = sim.ball() {
        surface.fill_circle(ball.pos, ball.radius, palette.ball)?;
    }

    let score = sim.score();
    surface.fill_text(
        &score.player.to_string(),
        Vec2::new(arena.width * 0.25, SCORE_BASELINE),
        palette.score,
    )?;
    surface.fill_text(
        &score.ai.to_string(),
        Vec2::new(arena.width * 0.75, SCORE_BASELINE),
        palette.score,
    )?;

    Ok(())
}

/// Dashed divider down the middle
fn draw_net<S: Surface + ?Sized>(surface: &mut S, arena: &Arena, color: &str) -> Result<(), String> {
    let x = arena.width / 2.0;
    let mut y = 0.0;
    while y < arena.height {
        surface.stroke_line(Vec2::new(x, y), Vec2::new(x, y + NET_DASH), color)?;
        y += NET_SPACING;
    }
    Ok(())
}

fn draw_paddle<S: Surface + ?Sized>(surface: &mut S, paddle: &Paddle, color: &str) -> Result<(), String> {
    surface.fill_rect(
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(paddle.width, paddle.height),
        color,
    )
}
