// Restartable, non-looping animation timelines.
//
// Every started segment writes its value each tick, in insertion order, so a
// later segment on a channel wins over an earlier one. Playback runs
// Paused -> Playing -> Finished; `play_from_start` rewinds from any state.

use smallvec::SmallVec;

use super::easing::Ease;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<K> {
    pub channel: K,
    pub start: f32,
    pub duration: f32,
    pub from: f32,
    pub to: f32,
    pub ease: Ease,
}

impl<K> Segment<K> {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Value of this segment at local time `t`, holding the endpoints outside its span.
    #[inline]
    pub fn value_at(&self, t: f32) -> f32 {
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            ((t - self.start) / self.duration).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * self.ease.evaluate(progress)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Paused,
    Playing,
    Finished,
}

#[derive(Clone, Debug)]
pub struct Timeline<K> {
    segments: SmallVec<[Segment<K>; 4]>,
    time_scale: f32,
    elapsed: f32,
    state: Playback,
}

impl<K: Copy> Default for Timeline<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy> Timeline<K> {
    pub fn new() -> Self {
        Self {
            segments: SmallVec::new(),
            time_scale: 1.0,
            elapsed: 0.0,
            state: Playback::Paused,
        }
    }

    /// Playback speed multiplier; 2.0 plays the timeline in half the wall time.
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale.max(f32::EPSILON);
        self
    }

    /// Append a segment that starts when the timeline currently ends.
    pub fn then(self, channel: K, duration: f32, from: f32, to: f32, ease: Ease) -> Self {
        let start = self.duration();
        self.at(start, channel, duration, from, to, ease)
    }

    /// Insert a segment at an absolute offset on the timeline's clock.
    pub fn at(mut self, start: f32, channel: K, duration: f32, from: f32, to: f32, ease: Ease) -> Self {
        self.segments.push(Segment {
            channel,
            start: start.max(0.0),
            duration: duration.max(0.0),
            from,
            to,
            ease,
        });
        self
    }

    /// Length of the timeline in its own (unscaled) seconds.
    pub fn duration(&self) -> f32 {
        self.segments.iter().map(Segment::end).fold(0.0, f32::max)
    }

    /// Wall-clock seconds a full playback takes.
    pub fn wall_duration(&self) -> f32 {
        self.duration() / self.time_scale
    }

    #[inline]
    pub fn state(&self) -> Playback {
        self.state
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == Playback::Playing
    }

    pub fn segments(&self) -> &[Segment<K>] {
        &self.segments
    }

    /// Index of the most recently started segment, if any has started.
    pub fn current_segment(&self) -> Option<usize> {
        if self.state == Playback::Paused && self.elapsed == 0.0 {
            return None;
        }
        self.segments
            .iter()
            .rposition(|s| s.start <= self.elapsed)
    }

    /// Rewind to zero and play, interrupting any playback in progress.
    pub fn play_from_start(&mut self) {
        self.elapsed = 0.0;
        self.state = Playback::Playing;
    }

    /// Write the values of every started segment at the current time.
    pub fn render(&self, mut apply: impl FnMut(K, f32)) {
        for seg in self.segments.iter().filter(|s| s.start <= self.elapsed) {
            apply(seg.channel, seg.value_at(self.elapsed));
        }
    }

    /// Write the starting value of every segment that begins at time zero.
    ///
    /// Used to show the first frame of an entrance before it is played.
    pub fn render_start(&self, mut apply: impl FnMut(K, f32)) {
        for seg in self.segments.iter().filter(|s| s.start <= 0.0) {
            apply(seg.channel, seg.from);
        }
    }

    /// Advance by `dt_sec` of wall time and write the new values.
    ///
    /// Returns `true` when values were written this tick. The final tick of a
    /// playback writes the end values and moves the timeline to `Finished`.
    pub fn advance(&mut self, dt_sec: f32, apply: impl FnMut(K, f32)) -> bool {
        if self.state != Playback::Playing {
            return false;
        }
        let total = self.duration();
        self.elapsed = (self.elapsed + dt_sec.max(0.0) * self.time_scale).min(total);
        self.render(apply);
        if self.elapsed >= total {
            self.state = Playback::Finished;
        }
        true
    }
}
