//! The clock wall and its two display modes.
//!
//! Every frame the wall clock decides the mode: the time readout shortly
//! before and just after each minute boundary, idle motion otherwise. Work
//! tied to a mode (assigning targets, drawing velocities) happens only on the
//! frame the mode is entered; integrating hand angles happens every frame.

use std::fmt;

use chrono::NaiveDateTime;
use rand::Rng;

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::glyph::{glyph_angles, HandPair, BLANK_ANGLE, COLON_ANGLES};
use crate::hand::{Approach, Hand};
use crate::render::{Layout, Renderer};
use crate::time::{sample_time, ClockTime, Lookahead};
use crate::topology::{digit_cells, CellIndex, CELL_COUNT, COLON_CELLS, DIGIT_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Hands wander at random velocities.
    Idle,
    /// Hands spell out the time.
    TimeReadout,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::TimeReadout => f.write_str("time readout"),
        }
    }
}

/// A single analog clock of the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockCell {
    hands: [Hand; 2],
}

impl ClockCell {
    fn at_rest(angles: [f64; 2]) -> Self {
        Self {
            hands: angles.map(Hand::at_rest),
        }
    }

    pub const fn hands(&self) -> &[Hand; 2] {
        &self.hands
    }

    fn assign_targets(&mut self, targets: HandPair) {
        for (hand, target) in self.hands.iter_mut().zip(targets) {
            hand.assign_target(target);
        }
    }
}

/// Result of one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub mode: DisplayMode,
    /// The mode was entered on this tick.
    pub entered: bool,
}

/// The 20×8 wall of clocks and the state machine driving it.
#[derive(Debug, Clone)]
pub struct ClockDisplay<G> {
    config: DisplayConfig,
    approach: Approach,
    cells: Vec<ClockCell>,
    mode: Option<DisplayMode>,
    rng: G,
}

impl<G> ClockDisplay<G> {
    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The active mode, `None` before the first update.
    pub const fn mode(&self) -> Option<DisplayMode> {
        self.mode
    }

    pub fn cell(&self, cell: CellIndex) -> &ClockCell {
        &self.cells[cell.offset()]
    }

    pub fn hand(&self, cell: CellIndex, hand: usize) -> &Hand {
        &self.cell(cell).hands[hand]
    }

    /// Every clock with its grid position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (CellIndex, &ClockCell)> {
        CellIndex::all().zip(&self.cells)
    }

    fn hands_mut(&mut self) -> impl Iterator<Item = &mut Hand> {
        self.cells.iter_mut().flat_map(|cell| cell.hands.iter_mut())
    }

    fn mode_for(&self, time: ClockTime) -> DisplayMode {
        let second = time.second;
        if 60 - second <= self.config.pre_roll_seconds || second <= self.config.post_roll_seconds {
            DisplayMode::TimeReadout
        } else {
            DisplayMode::Idle
        }
    }
}

impl<G: Rng> ClockDisplay<G> {
    /// A wall of stationary clocks. The configuration is validated here.
    pub fn new(config: DisplayConfig, rng: G) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            approach: Approach::from(&config),
            cells: vec![ClockCell::at_rest(config.initial_angles); CELL_COUNT],
            mode: None,
            rng,
            config,
        })
    }

    /// Advances every hand by one frame at wall time `now`.
    pub fn update(&mut self, now: NaiveDateTime) -> Result<Tick> {
        let time = sample_time(now, None, self.config.hour_format);
        let mode = self.mode_for(time);

        let entered = self.mode != Some(mode);
        if entered {
            self.on_enter(mode, now)?;
            self.mode = Some(mode);
        }

        match mode {
            DisplayMode::TimeReadout => {
                let frames_remaining = f64::from((60 - time.second) * self.config.frame_rate);
                let approach = self.approach;
                for hand in self.hands_mut() {
                    hand.step_time_readout(frames_remaining, &approach);
                }
            }
            DisplayMode::Idle => self.hands_mut().for_each(Hand::step_idle),
        }

        Ok(Tick { mode, entered })
    }

    /// [`update`](Self::update) followed by drawing the frame.
    pub fn tick<R>(&mut self, now: NaiveDateTime, layout: &Layout, renderer: &mut R) -> Result<Tick>
    where
        R: Renderer + ?Sized,
    {
        let tick = self.update(now)?;
        layout.draw(self, renderer);
        Ok(tick)
    }

    fn on_enter(&mut self, mode: DisplayMode, now: NaiveDateTime) -> Result<()> {
        match mode {
            DisplayMode::TimeReadout => self.enter_time_readout(now),
            DisplayMode::Idle => {
                self.enter_idle();
                Ok(())
            }
        }
    }

    fn enter_time_readout(&mut self, now: NaiveDateTime) -> Result<()> {
        let (min, max) = (self.config.min_lerp_factor, self.config.max_lerp_factor);
        for cell in &mut self.cells {
            cell.assign_targets([BLANK_ANGLE; 2]);
            for hand in &mut cell.hands {
                hand.set_lerp_factor(self.rng.gen_range(min..max));
            }
        }

        let shown = sample_time(now, Some(Lookahead::from(&self.config)), self.config.hour_format);
        let digits = shown.digits();
        log::info!("showing {:02}:{:02}", shown.hour, shown.minute);

        for (slot, digit) in (0..DIGIT_SLOTS).zip(digits) {
            let cells = digit_cells(slot)?;
            let angles = glyph_angles(digit)?;
            for (cell, targets) in cells.iter().zip(angles) {
                self.cells[cell.offset()].assign_targets(*targets);
            }
        }
        for (cell, targets) in COLON_CELLS.iter().zip(COLON_ANGLES) {
            self.cells[cell.offset()].assign_targets(targets);
        }
        log::debug!("time readout targets assigned for digits {digits:?}");
        Ok(())
    }

    fn enter_idle(&mut self) {
        let (min, max) = self.config.angular_velocity_range();
        for cell in &mut self.cells {
            for hand in &mut cell.hands {
                hand.randomize_velocity(&mut self.rng, min, max);
            }
        }
        log::info!("idle motion at {min:.3}..{max:.3} deg/frame");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 6, 1)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn display() -> ClockDisplay<StdRng> {
        ClockDisplay::new(DisplayConfig::default(), StdRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn mode_windows_follow_thresholds() {
        let d = display();
        let mode = |s| d.mode_for(ClockTime::new(1, 0, s));
        assert_eq!(mode(53), DisplayMode::TimeReadout);
        assert_eq!(mode(52), DisplayMode::Idle);
        assert_eq!(mode(0), DisplayMode::TimeReadout);
        assert_eq!(mode(4), DisplayMode::TimeReadout);
        assert_eq!(mode(5), DisplayMode::Idle);
        assert_eq!(mode(30), DisplayMode::Idle);
    }

    #[test]
    fn first_update_is_an_edge() {
        let mut d = display();
        assert_eq!(d.mode(), None);
        let tick = d.update(at(3, 15, 20)).unwrap();
        assert_eq!(
            tick,
            Tick {
                mode: DisplayMode::Idle,
                entered: true
            }
        );
        let tick = d.update(at(3, 15, 20)).unwrap();
        assert!(!tick.entered);
    }

    #[test]
    fn stationary_start_targets_raw_glyph_angles() {
        let mut d = display();
        d.update(at(12, 42, 56)).unwrap();
        // Lookahead moves 12:42:56 to 12:43:26, so slot 3 shows a 3.
        let three = glyph_angles(3).unwrap();
        for (cell, angles) in digit_cells(3).unwrap().iter().zip(three) {
            assert_eq!(d.hand(*cell, 0).target(), angles[0]);
            assert_eq!(d.hand(*cell, 1).target(), angles[1]);
        }
        assert_eq!(d.hand(CellIndex::new(0, 0), 1).target(), BLANK_ANGLE);
        assert_eq!(d.hand(CellIndex::new(3, 10), 0).target(), COLON_ANGLES[3][0]);
    }

    #[test]
    fn lerp_factors_are_drawn_in_range() {
        let mut d = display();
        d.update(at(9, 0, 58)).unwrap();
        for (_, cell) in d.cells() {
            for hand in cell.hands() {
                assert!((0.01..0.04).contains(&hand.lerp_factor()));
            }
        }
    }
}
