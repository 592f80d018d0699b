//! Scheduled actions and the celebration timeline

use std::time::Duration;

/// Something the experience does when a timer fires
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    FloatingHeart,
    ReleaseRevealButton,
    /// Swap in the next message and the button label that goes with it
    ShowMessage { message: String, label: String },
    /// Five staggered random bursts
    HugeExplosion,
    RandomBurst,
    StartCurtain,
    CurtainBatch,
    StopCurtain,
    ShowKiss,
    StartMusicFade,
    MusicFadeStep,
    HideKiss,
    Reset,
    LowerCanvas,
}

impl Cue {
    /// Repeating heart spawners, safe to drop when frames are skipped
    pub fn is_spawner(&self) -> bool {
        matches!(self, Cue::FloatingHeart | Cue::CurtainBatch)
    }
}

/// What happens after "yes", relative to the moment of acceptance
pub const CELEBRATION: [(Duration, Cue); 10] = [
    (Duration::ZERO, Cue::HugeExplosion),
    (Duration::ZERO, Cue::HugeExplosion),
    (Duration::from_millis(500), Cue::HugeExplosion),
    (Duration::from_secs(3), Cue::StartCurtain),
    (Duration::from_secs(7), Cue::ShowKiss),
    (Duration::from_secs(8), Cue::StopCurtain),
    (Duration::from_secs(9), Cue::StartMusicFade),
    (Duration::from_secs(10), Cue::HideKiss),
    (Duration::from_secs(13), Cue::Reset),
    (Duration::from_secs(15), Cue::LowerCanvas),
];
