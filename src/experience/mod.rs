//! The proposal experience: one session object owning the particle field,
//! the reveal sequence, the decline control, the music and every timer.
//!
//! Input handlers call the `open_card` / `press_reveal` / `accept` /
//! `dodge` methods; the frame loop calls [`Experience::advance`] with the
//! elapsed time. All delayed behaviour goes through the scheduler as
//! [`Cue`]s, so a test can drive the whole choreography with a simulated
//! clock.

mod cue;
mod state;

use crate::audio::MusicPlayer;
use crate::config::{audio, curtain, layout, particles, timing};
use crate::effects::ParticleField;
use crate::evasive::{EvasiveControl, Placement};
use crate::sequencer::{RevealSequencer, RevealStep};
use crate::settings::Settings;
use crate::timeline::{Scheduler, TimerId};
use rand::Rng;
use rand::rngs::StdRng;
use std::time::Duration;

pub use cue::{CELEBRATION, Cue};
pub use state::UiState;

fn frame() -> Duration {
    Duration::from_micros(timing::FRAME_MICROS)
}

pub struct Experience {
    settings: Settings,
    field: ParticleField,
    sequencer: RevealSequencer,
    decline: EvasiveControl,
    scheduler: Scheduler<Cue>,
    music: Box<dyn MusicPlayer>,
    rng: StdRng,
    ui: UiState,
    floating_timer: Option<TimerId>,
    curtain_timer: Option<TimerId>,
    fade_timer: Option<TimerId>,
    /// Message swaps and button animations, dropped on reset
    pending: Vec<TimerId>,
    celebrating: bool,
    accumulator: Duration,
}

impl Experience {
    pub fn new(
        settings: Settings,
        music: Box<dyn MusicPlayer>,
        mut rng: StdRng,
        width: f32,
        height: f32,
        scale: f32,
    ) -> Self {
        let field = ParticleField::new(&mut rng, width, height, scale);
        let sequencer = RevealSequencer::new(
            settings.messages.clone(),
            settings.reveal_label.clone(),
            settings.final_label.clone(),
            settings.encouragements.clone(),
        );
        let ui = UiState::new(&settings);

        Self {
            settings,
            field,
            sequencer,
            decline: EvasiveControl::new(),
            scheduler: Scheduler::new(),
            music,
            rng,
            ui,
            floating_timer: None,
            curtain_timer: None,
            fade_timer: None,
            pending: Vec::new(),
            celebrating: false,
            accumulator: Duration::ZERO,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Label currently shown on the reveal button
    pub fn reveal_label(&self) -> &str {
        &self.ui.reveal_label
    }

    pub fn revealed_count(&self) -> usize {
        self.sequencer.index()
    }

    pub fn decline_placement(&self) -> Placement {
        self.decline.placement()
    }

    pub fn scheduler(&self) -> &Scheduler<Cue> {
        &self.scheduler
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn resize(&mut self, width: f32, height: f32, scale: f32) {
        self.field.resize(width, height, scale);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Open the closed card. Returns false if it was already open.
    pub fn open_card(&mut self) -> bool {
        if self.ui.card_open {
            return false;
        }
        self.ui.card_open = true;
        tracing::info!("card opened");

        if self.music.is_paused() {
            self.music.set_volume(audio::OPENING_VOLUME);
            if let Err(err) = self.music.play() {
                tracing::warn!("audio play failed: {err}");
            }
        }

        let (x, y) = (self.field.width() / 2.0, self.field.height() / 2.0);
        self.field
            .spawn_burst(&mut self.rng, x, y, particles::BURST_COUNT);
        self.start_floating_hearts();
        true
    }

    /// (Re)start the idle floating-heart spawner, replacing any running one
    pub fn start_floating_hearts(&mut self) {
        if let Some(id) = self.floating_timer.take() {
            self.scheduler.cancel(id);
        }
        self.floating_timer = Some(self.scheduler.every(
            Duration::from_millis(timing::FLOATING_HEART_MS),
            Cue::FloatingHeart,
        ));
    }

    pub fn press_reveal(&mut self) -> RevealStep {
        self.ui.reveal_scale = layout::REVEAL_PRESSED_SCALE;
        self.schedule_pending(timing::BUTTON_PRESS_MS, Cue::ReleaseRevealButton);

        let step = self.sequencer.trigger();
        match &step {
            RevealStep::Reveal {
                index,
                message,
                label,
            } => {
                tracing::info!("revealing message {} of {}", index + 1, self.sequencer.len());
                self.ui.message_shown = false;
                self.schedule_pending(
                    timing::MESSAGE_SWAP_MS,
                    Cue::ShowMessage {
                        message: message.clone(),
                        label: label.clone(),
                    },
                );
            }
            RevealStep::Exhausted => {
                if !self.ui.dialog_visible {
                    tracing::info!("all messages shown, proposing");
                }
                self.ui.dialog_visible = true;
                self.apply(Cue::HugeExplosion);
            }
        }
        step
    }

    /// "Yes". Starts the celebration; ignored while one is running.
    pub fn accept(&mut self) -> bool {
        if self.celebrating {
            return false;
        }
        self.celebrating = true;
        tracing::info!("proposal accepted");

        self.ui.accept_label = self.settings.accepted_label.clone();
        self.music.set_volume(audio::CELEBRATION_VOLUME);
        self.decline.hide();

        for (offset, cue) in CELEBRATION {
            self.scheduler.once(offset, cue);
        }
        true
    }

    /// Move the decline control somewhere else in the viewport
    pub fn dodge(&mut self, control: (f32, f32)) -> Option<(f32, f32)> {
        let viewport = (self.field.width(), self.field.height());
        self.decline.relocate(&mut self.rng, viewport, control)
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.rng.gen_bool(particles::SPARKLE_CHANCE) {
            self.field.spawn_sparkle(x, y);
        }
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Advance by `elapsed` wall time in fixed 60 Hz steps. Each step fires
    /// the cues that came due and then moves the particles.
    ///
    /// After a stall only the first `MAX_STEPS_PER_ADVANCE` steps move the
    /// particles. The clock still catches up fully, but the remaining steps
    /// drop the repeating heart spawners, whose hearts would never age.
    pub fn advance(&mut self, elapsed: Duration) {
        self.accumulator += elapsed;
        let frame = frame();
        let mut steps = 0;

        while self.accumulator >= frame {
            self.accumulator -= frame;
            let stepping = steps < timing::MAX_STEPS_PER_ADVANCE;
            let now = self.scheduler.now() + frame;
            for (id, cue) in self.scheduler.advance_to(now) {
                self.pending.retain(|p| *p != id);
                if stepping || !cue.is_spawner() {
                    self.apply(cue);
                }
            }

            if stepping {
                self.field.step();
                self.animate_message();
            }
            steps += 1;
        }
    }

    fn animate_message(&mut self) {
        let rate = timing::FRAME_MICROS as f32 / (timing::MESSAGE_SWAP_MS as f32 * 1000.0);
        let target = if self.ui.message_shown { 1.0 } else { 0.0 };
        let opacity = self.ui.message_opacity;
        self.ui.message_opacity = if opacity < target {
            (opacity + rate).min(target)
        } else {
            (opacity - rate).max(target)
        };
    }

    fn schedule_pending(&mut self, delay_ms: u64, cue: Cue) {
        let id = self.scheduler.once(Duration::from_millis(delay_ms), cue);
        self.pending.push(id);
    }

    fn random_burst(&mut self) {
        let x = self.rng.gen_range(0.0..1.0) * self.field.width();
        let y = self.rng.gen_range(0.0..1.0) * self.field.height();
        self.field
            .spawn_burst(&mut self.rng, x, y, particles::BURST_COUNT);
    }

    fn apply(&mut self, cue: Cue) {
        match cue {
            Cue::FloatingHeart => {
                self.field.spawn_floating(&mut self.rng);
            }
            Cue::ReleaseRevealButton => self.ui.reveal_scale = layout::REVEAL_RELEASED_SCALE,
            Cue::ShowMessage { message, label } => {
                self.ui.message = message;
                self.ui.reveal_label = label;
                self.ui.message_shown = true;
            }
            Cue::HugeExplosion => {
                for i in 0..particles::EXPLOSION_BURSTS {
                    self.scheduler.once(
                        Duration::from_millis(i * timing::EXPLOSION_STAGGER_MS),
                        Cue::RandomBurst,
                    );
                }
            }
            Cue::RandomBurst => self.random_burst(),
            Cue::StartCurtain => {
                tracing::info!("heart curtain started");
                self.ui.canvas_raised = true;
                if let Some(id) = self.curtain_timer.take() {
                    self.scheduler.cancel(id);
                }
                self.curtain_timer = Some(
                    self.scheduler
                        .every(Duration::from_millis(curtain::BATCH_MS), Cue::CurtainBatch),
                );
            }
            Cue::CurtainBatch => self.field.spawn_curtain_batch(&mut self.rng),
            Cue::StopCurtain => {
                if let Some(id) = self.curtain_timer.take() {
                    self.scheduler.cancel(id);
                }
                tracing::debug!("heart curtain stopped");
            }
            Cue::ShowKiss => self.ui.kiss_visible = true,
            Cue::HideKiss => self.ui.kiss_visible = false,
            Cue::StartMusicFade => {
                tracing::debug!("fading out music");
                if let Some(id) = self.fade_timer.take() {
                    self.scheduler.cancel(id);
                }
                self.fade_timer = Some(self.scheduler.every(
                    Duration::from_millis(audio::FADE_STEP_MS),
                    Cue::MusicFadeStep,
                ));
            }
            Cue::MusicFadeStep => self.fade_step(),
            Cue::Reset => self.reset(),
            Cue::LowerCanvas => {
                self.ui.canvas_raised = false;
                self.celebrating = false;
            }
        }
    }

    fn fade_step(&mut self) {
        let volume = self.music.volume();
        if volume > audio::FADE_STEP {
            self.music.set_volume(volume - audio::FADE_STEP);
            return;
        }

        self.music.set_volume(0.0);
        self.music.pause();
        self.music.rewind();
        if let Some(id) = self.fade_timer.take() {
            self.scheduler.cancel(id);
        }
        tracing::debug!("music faded out");
    }

    /// Back to the closed card. Hearts already on screen keep falling.
    fn reset(&mut self) {
        tracing::info!("resetting experience");
        if let Some(id) = self.floating_timer.take() {
            self.scheduler.cancel(id);
        }
        for id in self.pending.drain(..) {
            self.scheduler.cancel(id);
        }

        let canvas_raised = self.ui.canvas_raised;
        self.ui = UiState::new(&self.settings);
        self.ui.canvas_raised = canvas_raised;

        self.sequencer.reset();
        self.ui.reveal_label = self.sequencer.label().to_string();
        self.decline.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct MusicLog {
        volume: f32,
        playing: bool,
        plays: usize,
        rewinds: usize,
        fail: bool,
    }

    struct FakeMusic(Rc<RefCell<MusicLog>>);

    impl MusicPlayer for FakeMusic {
        fn play(&mut self) -> Result<(), AudioError> {
            let mut log = self.0.borrow_mut();
            log.plays += 1;
            if log.fail {
                return Err(AudioError::Open {
                    path: "music.mp3".into(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            log.playing = true;
            Ok(())
        }

        fn pause(&mut self) {
            self.0.borrow_mut().playing = false;
        }

        fn is_paused(&self) -> bool {
            !self.0.borrow().playing
        }

        fn volume(&self) -> f32 {
            self.0.borrow().volume
        }

        fn set_volume(&mut self, volume: f32) {
            self.0.borrow_mut().volume = volume;
        }

        fn rewind(&mut self) {
            self.0.borrow_mut().rewinds += 1;
        }
    }

    fn experience() -> (Experience, Rc<RefCell<MusicLog>>) {
        let log = Rc::new(RefCell::new(MusicLog::default()));
        let music = Box::new(FakeMusic(log.clone()));
        let exp = Experience::new(
            Settings::default(),
            music,
            StdRng::seed_from_u64(2024),
            1000.0,
            800.0,
            1.0,
        );
        (exp, log)
    }

    fn run_for(exp: &mut Experience, ms: u64) {
        for _ in 0..ms / 10 {
            exp.advance(Duration::from_millis(10));
        }
    }

    fn floating_spawners(exp: &Experience) -> usize {
        exp.scheduler()
            .pending()
            .filter(|c| **c == Cue::FloatingHeart)
            .count()
    }

    fn open_and_propose(exp: &mut Experience) {
        exp.open_card();
        for _ in 0..exp.settings().messages.len() {
            assert!(matches!(exp.press_reveal(), RevealStep::Reveal { .. }));
        }
        assert_eq!(exp.press_reveal(), RevealStep::Exhausted);
        assert!(exp.ui().dialog_visible);
    }

    #[test]
    fn test_open_card_starts_music_and_bursts() {
        let (mut exp, log) = experience();
        assert!(exp.open_card());
        assert!(exp.ui().card_open);
        assert_eq!(exp.field().hearts().len(), particles::BURST_COUNT);
        assert_eq!(log.borrow().plays, 1);
        assert_eq!(log.borrow().volume, audio::OPENING_VOLUME);
        assert_eq!(floating_spawners(&exp), 1);

        // Second click on an open card does nothing
        assert!(!exp.open_card());
        assert_eq!(log.borrow().plays, 1);
    }

    #[test]
    fn test_audio_failure_is_not_fatal() {
        let (mut exp, log) = experience();
        log.borrow_mut().fail = true;
        assert!(exp.open_card());
        assert!(exp.ui().card_open);
        assert_eq!(exp.field().hearts().len(), particles::BURST_COUNT);
    }

    #[test]
    fn test_floating_starter_is_idempotent() {
        let (mut exp, _) = experience();
        exp.start_floating_hearts();
        exp.start_floating_hearts();
        assert_eq!(floating_spawners(&exp), 1);
    }

    #[test]
    fn test_floating_hearts_spawn_while_idle() {
        let (mut exp, _) = experience();
        exp.start_floating_hearts();
        run_for(&mut exp, 1000);
        let hearts = exp.field().hearts();
        assert!(!hearts.is_empty());
        assert!(hearts.iter().all(|h| h.gravity == 0.0));
    }

    #[test]
    fn test_seven_presses_reveal_six_then_propose() {
        let (mut exp, _) = experience();
        exp.open_card();
        let steps: Vec<bool> = (0..7)
            .map(|_| matches!(exp.press_reveal(), RevealStep::Reveal { .. }))
            .collect();
        assert_eq!(steps, vec![true, true, true, true, true, true, false]);
        assert!(exp.ui().dialog_visible);

        // The label follows the message swap, not the press
        assert_eq!(exp.reveal_label(), exp.settings().reveal_label);
        run_for(&mut exp, 400);
        assert_eq!(exp.reveal_label(), exp.settings().final_label);
    }

    #[test]
    fn test_message_swaps_after_fade_out() {
        let (mut exp, _) = experience();
        exp.open_card();
        exp.press_reveal();
        assert!(exp.ui().message.is_empty());
        assert_eq!(exp.ui().reveal_scale, layout::REVEAL_PRESSED_SCALE);

        run_for(&mut exp, 200);
        assert_eq!(exp.ui().reveal_scale, layout::REVEAL_RELEASED_SCALE);
        assert!(exp.ui().message.is_empty());
        assert_eq!(exp.reveal_label(), exp.settings().reveal_label);

        run_for(&mut exp, 200);
        assert_eq!(exp.ui().message, exp.settings().messages[0]);
        assert_eq!(exp.reveal_label(), exp.settings().encouragements[0]);
        assert!(exp.ui().message_shown);

        run_for(&mut exp, 400);
        assert_eq!(exp.ui().message_opacity, 1.0);
    }

    #[test]
    fn test_exhausted_press_fires_huge_explosion() {
        let (mut exp, _) = experience();
        open_and_propose(&mut exp);
        let before = exp.field().hearts().len();
        run_for(&mut exp, 900);
        // Hearts live about 1.6s, so nothing has faded yet
        assert!(exp.field().hearts().len() >= before + 5 * particles::BURST_COUNT);
    }

    #[test]
    fn test_dodge_stays_in_safe_rect() {
        let (mut exp, _) = experience();
        for _ in 0..200 {
            let (x, y) = exp.dodge((100.0, 40.0)).unwrap();
            assert!((200.0..=700.0).contains(&x));
            assert!((160.0..=600.0).contains(&y), "y = {y}");
        }
        assert!(matches!(exp.decline_placement(), Placement::Floating { .. }));
    }

    #[test]
    fn test_celebration_timeline() {
        let (mut exp, log) = experience();
        open_and_propose(&mut exp);
        exp.dodge((100.0, 40.0));

        assert!(exp.accept());
        assert_eq!(exp.ui().accept_label, exp.settings().accepted_label);
        assert_eq!(exp.decline_placement(), Placement::Hidden);
        assert_eq!(log.borrow().volume, audio::CELEBRATION_VOLUME);

        run_for(&mut exp, 2900);
        assert!(!exp.ui().canvas_raised);

        run_for(&mut exp, 200); // T+3.1s
        assert!(exp.ui().canvas_raised);
        assert!(exp.scheduler().pending().any(|c| *c == Cue::CurtainBatch));

        run_for(&mut exp, 3800); // T+6.9s
        assert!(!exp.ui().kiss_visible);

        run_for(&mut exp, 200); // T+7.1s
        assert!(exp.ui().kiss_visible);

        run_for(&mut exp, 1000); // T+8.1s
        assert!(!exp.scheduler().pending().any(|c| *c == Cue::CurtainBatch));

        run_for(&mut exp, 1800); // T+9.9s
        assert!(exp.ui().kiss_visible);
        assert!(log.borrow().volume < audio::CELEBRATION_VOLUME);

        run_for(&mut exp, 200); // T+10.1s
        assert!(!exp.ui().kiss_visible);

        run_for(&mut exp, 2800); // T+12.9s
        assert!(exp.ui().card_open);

        run_for(&mut exp, 200); // T+13.1s
        let ui = exp.ui();
        assert!(!ui.card_open);
        assert!(!ui.dialog_visible);
        assert!(ui.message.is_empty());
        assert_eq!(ui.accept_label, exp.settings().accept_label);
        assert_eq!(exp.reveal_label(), exp.settings().reveal_label);
        assert_eq!(exp.revealed_count(), 0);
        assert_eq!(exp.decline_placement(), Placement::Docked);
        assert_eq!(floating_spawners(&exp), 0);
        assert!(ui.canvas_raised);

        run_for(&mut exp, 2000); // T+15.1s
        assert!(!exp.ui().canvas_raised);
        assert!(!exp.is_celebrating());

        let log = log.borrow();
        assert_eq!(log.volume, 0.0);
        assert!(!log.playing);
        assert_eq!(log.rewinds, 1);
    }

    #[test]
    fn test_music_fade_steps_every_400ms() {
        let (mut exp, log) = experience();
        open_and_propose(&mut exp);
        exp.accept();
        run_for(&mut exp, 9000);
        assert_eq!(log.borrow().volume, audio::CELEBRATION_VOLUME);
        run_for(&mut exp, 450);
        assert!((log.borrow().volume - 0.45).abs() < 1e-4);
        run_for(&mut exp, 400);
        assert!((log.borrow().volume - 0.40).abs() < 1e-4);
    }

    #[test]
    fn test_second_accept_is_ignored() {
        let (mut exp, _) = experience();
        open_and_propose(&mut exp);
        assert!(exp.accept());
        let pending = exp.scheduler().len();
        assert!(!exp.accept());
        assert_eq!(exp.scheduler().len(), pending);
    }

    #[test]
    fn test_experience_can_run_again_after_reset() {
        let (mut exp, log) = experience();
        open_and_propose(&mut exp);
        exp.accept();
        run_for(&mut exp, 15_500);

        assert!(exp.open_card());
        assert_eq!(log.borrow().plays, 2);
        open_and_propose_again(&mut exp);
        assert!(exp.accept());
    }

    fn open_and_propose_again(exp: &mut Experience) {
        for _ in 0..exp.settings().messages.len() {
            exp.press_reveal();
        }
        assert_eq!(exp.press_reveal(), RevealStep::Exhausted);
    }

    #[test]
    fn test_reset_keeps_hearts_in_flight() {
        let (mut exp, _) = experience();
        exp.open_card();
        exp.apply(Cue::StartCurtain);
        run_for(&mut exp, 100);
        let in_flight = exp.field().hearts().len();
        assert!(in_flight > particles::BURST_COUNT);

        exp.apply(Cue::Reset);
        assert_eq!(exp.field().hearts().len(), in_flight);
    }

    #[test]
    fn test_reset_cancels_pending_message_swap() {
        let (mut exp, _) = experience();
        exp.open_card();
        exp.press_reveal();
        exp.apply(Cue::Reset);
        run_for(&mut exp, 500);
        assert!(exp.ui().message.is_empty());
        assert_eq!(exp.ui().reveal_scale, 1.0);
        assert_eq!(exp.reveal_label(), exp.settings().reveal_label);
    }

    #[test]
    fn test_long_stall_catches_up_whole_celebration() {
        let (mut exp, log) = experience();
        open_and_propose(&mut exp);
        exp.accept();
        exp.advance(Duration::from_secs(20));

        assert!(exp.scheduler().now() >= Duration::from_millis(19_900));
        assert!(exp.scheduler().is_empty());
        let ui = exp.ui();
        assert!(!ui.card_open);
        assert!(!ui.dialog_visible);
        assert!(!ui.kiss_visible);
        assert!(!ui.canvas_raised);
        assert!(!exp.is_celebrating());
        assert_eq!(log.borrow().volume, 0.0);
        assert_eq!(log.borrow().rewinds, 1);

        // Explosion bursts only; no curtain batches pile up unstepped
        let bursts = 1 + 4 * particles::EXPLOSION_BURSTS as usize;
        let limit = bursts * particles::BURST_COUNT + particles::FLOATING_SOFT_CAP;
        assert!(exp.field().hearts().len() <= limit);
    }

    #[test]
    fn test_stall_during_curtain_adds_no_unstepped_hearts() {
        let (mut exp, _) = experience();
        open_and_propose(&mut exp);
        exp.accept();
        run_for(&mut exp, 3500);
        let before = exp.field().hearts().len();

        exp.advance(Duration::from_secs(2));
        // Only the first thirty frames may spawn curtain batches
        let budget = timing::MAX_STEPS_PER_ADVANCE as usize * timing::FRAME_MICROS as usize
            / (curtain::BATCH_MS as usize * 1000)
            + 1;
        assert!(exp.field().hearts().len() <= before + budget * curtain::BATCH_SIZE);
        // Every curtain heart has moved at least once since it spawned
        let mut curtain_hearts = exp.field().hearts().iter().filter(|h| h.vx == 0.0);
        assert!(curtain_hearts.all(|h| h.y > curtain::SPAWN_TOP + curtain::MIN_FALL_SPEED - 1.0));
    }

    #[test]
    fn test_pointer_moves_sometimes_sparkle() {
        let (mut exp, _) = experience();
        for _ in 0..1000 {
            exp.pointer_moved(10.0, 10.0);
        }
        let sparkles = exp.field().sparkles().len();
        assert!(sparkles > 50 && sparkles < 200, "{sparkles} sparkles");
    }
}
