/// Match tuning parameters, in pixels and seconds
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Pitch
    pub const PITCH_WIDTH: f32 = 800.0;
    pub const PITCH_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 30.0; // distance from goal edge to paddle center
    pub const PADDLE_SPEED: f32 = 400.0; // units per second

    // AI
    pub const AI_SPEED: f32 = 300.0; // slower than a human so it can be beaten

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 400.0;
    pub const BALL_SPEED_MAX: f32 = 900.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const LAUNCH_HALF_ANGLE: f32 = std::f32::consts::FRAC_PI_4; // ±45°

    // Match
    pub const WAIT_DELAY: f32 = 3.0; // seconds the ball sits at center before launch
    pub const RNG_SEED: u64 = 12345;

    // Physics
    pub const BALL_SUBSTEP_DT: f32 = 1.0 / 120.0;
}
