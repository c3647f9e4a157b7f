//! Hand-checked game sessions.
//!
//! All fixtures use the default 80x24 board, where the snake starts at
//! (12, 18)..(12, 20) heading right.
//!
//! - [`two_food_run`]: eats two foods, then runs left into the wall.
//! - [`two_food_run_self_collision`]: turns back into itself after one food.

use coil_core::Direction;
use coil_replay::ReplayRecord;

use crate::ReplayBuilder;

/// Score the honest two-food run ends with.
pub const TWO_FOOD_SCORE: u32 = 2;
/// Length the honest two-food run ends with.
pub const TWO_FOOD_SIZE: u16 = 5;
/// Frame at which the two-food run hits the left wall.
pub const TWO_FOOD_WALL_FRAME: u32 = 22;

/// Builder for the two-food run, before any claim is set.
///
/// Frame 0 eats (12, 21). Frame 1 turns up to (11, 21). Frame 2 turns
/// left and eats (11, 20). The snake then heads left along row 11 and
/// would enter column 0 on frame 22.
pub fn two_food_builder(total_frames: u32) -> ReplayBuilder {
    ReplayBuilder::new()
        .seed(12_345)
        .total_frames(total_frames)
        .total_time_ms(total_frames * 100)
        .turn(1, Direction::Up)
        .turn(2, Direction::Left)
        .food(0, 12, 21)
        .food(1, 11, 20)
}

/// The two-food run with an honest claim, long enough to reach the wall.
pub fn two_food_run() -> ReplayRecord {
    two_food_builder(TWO_FOOD_WALL_FRAME + 1)
        .claim(TWO_FOOD_SCORE, TWO_FOOD_SIZE)
        .build()
}

/// Same inputs, but both turns land on frame 1.
///
/// Right, up, then left within one frame sends the head back onto
/// (12, 20), which is still body. The run stops there with score 1 and
/// length 4, while the claim says length 5.
pub fn two_food_run_self_collision() -> ReplayRecord {
    ReplayBuilder::new()
        .seed(12_345)
        .total_frames(TWO_FOOD_WALL_FRAME + 1)
        .turn(1, Direction::Up)
        .turn(1, Direction::Left)
        .food(0, 12, 21)
        .food(1, 11, 20)
        .claim(1, TWO_FOOD_SIZE)
        .build()
}
