//! Tuning constants for the fishing engine and the frame loop.

/// Target frame interval for the render/update loop (~60 FPS).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// World height of the water plane. The bobber settles here.
pub const WATER_HEIGHT: f64 = 0.0;

/// Downward acceleration applied to the bobber in flight (units/s^2).
pub const GRAVITY: f64 = 9.8;

/// Cast charge accumulated per second of holding (full power in 1s).
pub const CHARGE_RATE: f64 = 100.0;

/// Maximum cast charge.
pub const MAX_CHARGE: f64 = 100.0;

/// Launch speed at zero charge (units/s).
pub const BASE_CAST_SPEED: f64 = 10.0;

/// Additional launch speed at full charge (units/s).
pub const CHARGE_CAST_SPEED: f64 = 20.0;

/// Upward bias added to the aim direction before renormalizing, so casts arc.
pub const CAST_ARC_BIAS: f64 = 0.5;

/// Distance in front of the camera where the cast originates.
pub const CAST_ORIGIN_OFFSET: f64 = 1.0;

/// Bite delay range drawn on splashdown, seconds. Half-open: [min, max).
pub const BITE_DELAY_MIN: f64 = 2.0;
pub const BITE_DELAY_MAX: f64 = 7.0;

/// Reaction window range drawn on a bite, seconds. Half-open: [min, max).
pub const BITE_WINDOW_MIN: f64 = 0.5;
pub const BITE_WINDOW_MAX: f64 = 1.0;

/// Amplitude of the idle float animation while waiting (cosmetic).
pub const FLOAT_AMPLITUDE: f64 = 0.05;

/// Angular speed of the idle float animation (radians/s of sim time).
pub const FLOAT_SPEED: f64 = 5.0;

/// How far the bobber is pulled under while a fish is on (cosmetic).
pub const BITE_DEPRESSION: f64 = -0.2;

/// Jitter amplitude around the depressed offset while biting (cosmetic).
pub const BITE_JITTER: f64 = 0.05;

/// Angular speed of the bite jitter (radians/s of sim time).
pub const BITE_JITTER_SPEED: f64 = 40.0;

/// Seconds without a Space key-repeat before the charge is treated as
/// released. Terminals without release reporting only emit repeats while a
/// key is held, so the input layer synthesizes the release when the repeats
/// stop. Sized to bridge the initial key-repeat delay.
pub const CAST_HOLD_WINDOW: f64 = 0.6;

/// Player walk step per movement keypress (units).
pub const PLAYER_MOVE_STEP: f64 = 0.5;

/// Look rotation per arrow keypress (radians).
pub const PLAYER_LOOK_STEP: f64 = 0.08;

/// Default notification duration, seconds.
pub const NOTIFICATION_SECS: f64 = 1.0;

/// Notification duration for catches and sales, seconds.
pub const NOTIFICATION_LONG_SECS: f64 = 2.0;
