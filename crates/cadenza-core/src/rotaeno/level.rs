/// XP needed to advance out of each level, starting at level 1.
const XP_STEPS: [i64; 45] = [
    100, 120, 140, 160, 180, 200, 220, 240, 300, 210, //
    220, 230, 240, 250, 260, 270, 280, 290, 300, 250, //
    260, 270, 280, 290, 300, 310, 320, 330, 340, 350, //
    360, 370, 380, 390, 400, 410, 420, 430, 440, 450, //
    460, 470, 480, 490, 500,
];

/// Converts accumulated XP to a display level.
///
/// Whole levels follow the step table; XP left over past the table adds a
/// fractional level per 500 XP.
pub fn player_level(accum_xp: i64) -> f64 {
    let mut xp = accum_xp;
    let mut level = 1u32;
    for step in XP_STEPS {
        xp -= step;
        level += 1;
        if xp < 1 {
            break;
        }
    }

    let mut level = f64::from(level);
    if xp > 0 {
        level += xp as f64 / 500.0;
    }
    level
}
