// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use algorithm::{LapProgressAccumulator, LapProgressPoint, TrackOnSphere};
use common::position::GnssPosition;
use module_core::{Event, EventKind, Module, ModuleCtx};
use tracing::{debug, error, info, warn};

/// Fits live GNSS positions onto a track and reports the laps covered.
///
/// Every [`GnssPositionEvent`](EventKind::GnssPositionEvent) is fitted onto
/// the configured [`TrackOnSphere`]. A successful fit is accumulated and
/// published as [`LapProgressEvent`](EventKind::LapProgressEvent). Positions
/// that can't be fitted are logged and dropped; they don't change the
/// accumulated progress.
pub struct LapProgressModule {
    track: TrackOnSphere,
    accumulator: LapProgressAccumulator,
    module_ctx: ModuleCtx,
}

impl LapProgressModule {
    pub fn new(track: TrackOnSphere, ctx: ModuleCtx) -> Self {
        LapProgressModule {
            track,
            accumulator: LapProgressAccumulator::new(),
            module_ctx: ctx,
        }
    }

    /// Laps covered since start or the last reset.
    pub fn lap_progress(&self) -> f64 {
        self.accumulator.lap_progress()
    }

    /// Fits `pos` and accumulates it.
    ///
    /// # Returns
    /// The new progress point, or `None` if the position couldn't be fitted.
    pub fn update_position(&mut self, pos: &GnssPosition) -> Option<LapProgressPoint> {
        match self.track.fit_to_track(&pos.to_position()) {
            Ok(fitted) => Some(self.accumulator.push_fitted(&fitted)),
            Err(e) => {
                warn!(
                    "Dropping position lat: {} lon: {} Reason: {e}",
                    pos.latitude(),
                    pos.longitude()
                );
                None
            }
        }
    }

    /// Starts the accumulation over with the next position.
    pub fn reset(&mut self) {
        debug!("Lap progress reset at {} laps", self.lap_progress());
        self.accumulator.reset();
    }

    fn notify_consumer(&self, point: LapProgressPoint) {
        let _ = self.module_ctx.sender.send(Event {
            kind: EventKind::LapProgressEvent(point.into()),
        });
    }
}

#[async_trait::async_trait]
impl Module for LapProgressModule {
    async fn run(&mut self) -> Result<(), ()> {
        info!(
            "Lap progress started for a {} m lap",
            self.track.lap_length_meters()
        );
        let mut run = true;
        while run {
            tokio::select! {
                event = self.module_ctx.receiver.recv() => {
                    match event {
                        Ok(event) => match event.kind {
                            EventKind::QuitEvent => run = false,
                            EventKind::GnssPositionEvent(pos) => {
                                if let Some(point) = self.update_position(&pos) {
                                    self.notify_consumer(point);
                                }
                            }
                            EventKind::ResetLapProgressEvent => self.reset(),
                            _ => (),
                        },
                        Err(e) => error!("Failed to receive event. Error: {e}"),
                    }
                }
            }
        }
        Ok(())
    }
}
