// Ball trajectory prediction

use crate::config::FieldGeometry;
use crate::game::Ball;

// Reflection passes before giving up and clamping. The clamp below is the
// correctness guarantee; the cap only bounds the loop.
const MAX_BOUNCE_ITERATIONS: u32 = 10;

/// Predict the y position of the ball when it reaches `paddle_x`.
///
/// Extrapolates the ball linearly and folds the result back into the field
/// at each top/bottom wall crossing. A ball with no horizontal motion, or
/// one that will never reach the paddle, predicts its current y. The
/// caller is expected to have filtered receding balls already, so this is
/// a safe fallback rather than a meaningful aim point.
///
/// The result is always within `[ball_radius, field_height - ball_radius]`.
pub fn predict_ball_position(ball: &Ball, paddle_x: f32, geometry: &FieldGeometry) -> f32 {
    if ball.vx == 0.0 {
        return ball.y;
    }

    let time_to_reach = (paddle_x - ball.x) / ball.vx;
    if time_to_reach < 0.0 {
        // Ball moving away
        return ball.y;
    }

    let mut predicted_y = ball.y + ball.vy * time_to_reach;

    let field_height = geometry.field_height;
    let ball_radius = if ball.radius > 0.0 {
        ball.radius
    } else {
        geometry.ball_radius
    };
    let top = ball_radius;
    let bottom = field_height - ball_radius;

    // Fold wall overshoots back into range, once per bounce
    let mut iterations = 0;
    while (predicted_y < top || predicted_y > bottom) && iterations < MAX_BOUNCE_ITERATIONS {
        if predicted_y < top {
            predicted_y = top + (top - predicted_y);
        } else {
            predicted_y = bottom - (predicted_y - bottom);
        }
        iterations += 1;
    }

    // Clamp as a final safety net regardless of iteration outcome.
    // min-then-max stays total even when top > bottom.
    predicted_y.min(bottom).max(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: FieldGeometry = FieldGeometry {
        field_height: 6.0,
        paddle_height: 1.0,
        ball_radius: 0.15,
    };
    const AI_PADDLE_X: f32 = 9.0;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            x,
            y,
            vx,
            vy,
            radius: 0.15,
        }
    }

    #[test]
    fn test_straight_ball_predicts_current_height() {
        let predicted = predict_ball_position(&ball(5.0, 3.0, 0.02, 0.0), AI_PADDLE_X, &GEOMETRY);
        assert!((predicted - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_angled_ball_without_bounce() {
        // 200 ticks to the paddle, drifting down 0.005/tick
        let predicted = predict_ball_position(&ball(5.0, 3.0, 0.02, 0.005), AI_PADDLE_X, &GEOMETRY);
        assert!((predicted - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_single_bounce_reflects() {
        // Would reach y = 3.0 + 200 * 0.02 = 7.0 without walls;
        // folds at 5.85 to 4.7
        let predicted = predict_ball_position(&ball(5.0, 3.0, 0.02, 0.02), AI_PADDLE_X, &GEOMETRY);
        assert!((predicted - 4.7).abs() < 1e-4);
    }

    #[test]
    fn test_steep_ball_stays_in_field() {
        // Steep enough to bounce several times on the way over
        let predicted = predict_ball_position(&ball(1.0, 3.0, 0.02, 0.1), AI_PADDLE_X, &GEOMETRY);
        assert!(predicted >= GEOMETRY.ball_radius);
        assert!(predicted <= GEOMETRY.field_height - GEOMETRY.ball_radius);
    }

    #[test]
    fn test_stationary_ball_keeps_current_y() {
        let predicted = predict_ball_position(&ball(5.0, 2.2, 0.0, 0.05), AI_PADDLE_X, &GEOMETRY);
        assert_eq!(predicted, 2.2);
    }

    #[test]
    fn test_receding_ball_keeps_current_y() {
        // Moving left, away from the right-side paddle
        let predicted = predict_ball_position(&ball(5.0, 2.2, -0.02, 0.05), AI_PADDLE_X, &GEOMETRY);
        assert_eq!(predicted, 2.2);
    }

    #[test]
    fn test_extreme_velocity_clamped_into_field() {
        // Overshoots by far more than ten bounces can fold back
        let predicted = predict_ball_position(&ball(1.0, 3.0, 0.001, 50.0), AI_PADDLE_X, &GEOMETRY);
        assert!(predicted >= GEOMETRY.ball_radius);
        assert!(predicted <= GEOMETRY.field_height - GEOMETRY.ball_radius);
    }

    #[test]
    fn test_zero_radius_uses_field_default() {
        let mut b = ball(5.0, 3.0, 0.02, 0.02);
        b.radius = 0.0;
        let predicted = predict_ball_position(&b, AI_PADDLE_X, &GEOMETRY);
        assert!(predicted >= GEOMETRY.ball_radius);
        assert!(predicted <= GEOMETRY.field_height - GEOMETRY.ball_radius);
    }
}
