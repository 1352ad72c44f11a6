use super::TxQueue;

/// Highest place value the renderer walks. Values above 99_999 keep their
/// line framing but render '?' for the over-wide digit.
const MAX_PLACE: u32 = 10_000;

/// Line buffer: five digits, decimal point, newline.
const LINE_LEN: usize = 8;

/// Renders a scaled speed value as one ASCII line, one digit per tick.
///
/// The value is an integer scaled by `resolution` (a power of ten): with
/// resolution 10, value 123 renders as `"  12.3\n"`. Leading
/// zero digits render as spaces until the first non-zero digit or the
/// decimal point, whichever comes first. Rendering is spread across
/// control-loop iterations so it never stalls the measurement work.
pub struct SpeedReporter {
    resolution: u32,
    place: u32, // current place value; 0 while idle
    value: u32,
    line: [u8; LINE_LEN],
    idx: usize,
    leading: u8,
}

impl SpeedReporter {
    /// `resolution` must be a power of ten no greater than `MAX_PLACE`.
    pub const fn new(resolution: u32) -> Self {
        Self {
            resolution,
            place: 0,
            value: 0,
            line: [0; LINE_LEN],
            idx: 0,
            leading: b' ',
        }
    }

    /// Latch a new value for rendering. Ignored while a previous line is
    /// still being rendered; that report is lost, matching the lossy
    /// telemetry contract of the transmit queue.
    pub fn start(&mut self, value: u32) {
        if self.place == 0 {
            self.value = value;
            self.idx = 0;
            self.place = MAX_PLACE;
            self.leading = b' ';
        }
    }

    pub fn is_idle(&self) -> bool {
        self.place == 0
    }

    /// Render one digit. On the final digit the complete line (with '.'
    /// and trailing newline) is handed to the transmit queue in one shot.
    pub fn step<const N: usize>(&mut self, tx: &mut TxQueue<N>) {
        if self.place == 0 {
            return;
        }

        let digit = self.value / self.place;
        self.value -= digit * self.place;

        // Crossing the resolution place ends leading-zero suppression and
        // marks where the decimal point goes.
        let point = self.place == self.resolution;
        if point {
            self.leading = b'0';
        }

        if digit == 0 {
            self.line[self.idx] = self.leading;
        } else {
            self.leading = b'0';
            self.line[self.idx] = if digit <= 9 {
                b'0' + digit as u8
            } else {
                b'?'
            };
        }
        self.idx += 1;

        if point {
            self.line[self.idx] = b'.';
            self.idx += 1;
        }

        self.place /= 10;
        if self.place == 0 {
            self.line[self.idx] = b'\n';
            self.idx += 1;
            tx.write_bytes(&self.line[..self.idx]);
        }
    }

    /// Synchronous shape: render the whole line in one call. Produces
    /// byte-identical output to repeated `step` calls.
    pub fn write_now<const N: usize>(&mut self, value: u32, tx: &mut TxQueue<N>) {
        self.start(value);
        while self.place != 0 {
            self.step(tx);
        }
    }
}
