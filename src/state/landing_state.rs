//! Landing page animation state: highlight marquee and staggered headline

use std::time::{Duration, Instant};

const HEADLINE: &str = "Do real research before university";

const HIGHLIGHTS: &str = "12-week mentored projects  •  Published student papers  •  \
     Biology to Computer Science  •  Financial aid available  •  Applications open now";

/// Horizontally looping ticker
#[derive(Debug, Clone)]
pub struct Marquee {
    text: Vec<char>,
    /// Scroll speed in cells per second
    speed: f32,
    /// Blank cells between the end of the text and its next repetition
    gap: usize,
}

impl Marquee {
    pub fn new(text: &str, speed: f32) -> Self {
        Self {
            text: text.chars().collect(),
            speed: speed.max(0.0),
            gap: 6,
        }
    }

    fn cycle_len(&self) -> usize {
        self.text.len() + self.gap
    }

    /// The `width` cells visible after `elapsed`
    pub fn window(&self, width: usize, elapsed: Duration) -> String {
        let cycle = self.cycle_len();
        if self.text.is_empty() || width == 0 {
            return " ".repeat(width);
        }
        let offset = (elapsed.as_secs_f32() * self.speed) as usize % cycle;
        (0..width)
            .map(|i| {
                let pos = (offset + i) % cycle;
                self.text.get(pos).copied().unwrap_or(' ')
            })
            .collect()
    }
}

/// Text revealed word by word, each word starting `stagger` after the previous
#[derive(Debug, Clone)]
pub struct StaggeredText {
    words: Vec<String>,
    stagger: Duration,
    /// Reveal time of a single word
    duration: Duration,
}

impl StaggeredText {
    pub fn new(text: &str, stagger: Duration, duration: Duration) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
            stagger,
            duration,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Eased reveal progress of word `index` in 0.0..=1.0
    pub fn progress(&self, index: usize, elapsed: Duration) -> f32 {
        let start = self.stagger * index as u32;
        if elapsed <= start {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (elapsed - start).as_secs_f32() / self.duration.as_secs_f32();
        simple_easing::cubic_out(t.clamp(0.0, 1.0))
    }

    /// Number of characters of word `index` visible after `elapsed`
    pub fn visible_chars(&self, index: usize, elapsed: Duration) -> usize {
        let Some(word) = self.words.get(index) else {
            return 0;
        };
        let len = word.chars().count();
        ((self.progress(index, elapsed) * len as f32).ceil() as usize).min(len)
    }

    /// Time until the last word is fully revealed
    pub fn total_duration(&self) -> Duration {
        match self.words.len() {
            0 => Duration::ZERO,
            n => self.stagger * (n as u32 - 1) + self.duration,
        }
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }
}

/// Landing page animation state
#[derive(Debug)]
pub struct LandingState {
    /// When the landing page was entered
    pub start_time: Instant,
    pub marquee: Marquee,
    pub headline: StaggeredText,
    skipped: bool,
}

impl LandingState {
    const STAGGER: Duration = Duration::from_millis(120);
    const WORD_DURATION: Duration = Duration::from_millis(400);

    pub fn new(marquee_speed: f32) -> Self {
        Self {
            start_time: Instant::now(),
            marquee: Marquee::new(HIGHLIGHTS, marquee_speed),
            headline: StaggeredText::new(HEADLINE, Self::STAGGER, Self::WORD_DURATION),
            skipped: false,
        }
    }

    /// Animation clock; jumps past the headline reveal once skipped
    pub fn elapsed(&self) -> Duration {
        let elapsed = self.start_time.elapsed();
        if self.skipped {
            elapsed.max(self.headline.total_duration())
        } else {
            elapsed
        }
    }

    /// Reveal the headline immediately (user pressed a key)
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    pub fn is_revealed(&self) -> bool {
        self.headline.is_complete(self.elapsed())
    }

    /// Restart the reveal (landing page re-entered)
    pub fn restart(&mut self) {
        self.start_time = Instant::now();
        self.skipped = false;
    }
}
