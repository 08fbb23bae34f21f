use crate::{Ball, Pitch, Side};
use hecs::World;

/// Check if the ball left the pitch through a goal edge.
///
/// Returns the side that conceded; the match awards the point to the other side.
pub fn check_goal(world: &mut World, pitch: &Pitch) -> Option<Side> {
    world
        .query::<&Ball>()
        .iter()
        .find_map(|(_e, ball)| pitch.goal_crossed(ball.pos, ball.radius))
}
