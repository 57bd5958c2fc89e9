use crate::card::Color;
use crate::rng::GameRng;

/// Pick `count` distinct colors uniformly, without replacement
pub fn pick_colors(all_colors: &[Color], count: usize, rng: &mut GameRng) -> Vec<Color> {
    rng.sample_size(all_colors, count)
}
