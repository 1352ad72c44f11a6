pub mod speed_report;

/// Transmit side of the serial transport, as seen by the core logic.
///
/// The hardware driver implements this over the UART status/data registers;
/// tests implement it over a plain byte vector.
pub trait SerialTx {
    /// True when the transport can accept one more byte.
    fn ready_to_send(&self) -> bool;
    /// Hand one byte to the transport. Must only be called after
    /// `ready_to_send` returned true.
    fn send_byte(&mut self, byte: u8);
}

/// Bounded circular transmit queue.
///
/// `head == tail` means empty, so usable capacity is `N - 1`. A push into a
/// full queue drops the byte: this is a fire-and-forget telemetry link and
/// blocking would stall the measurement loop.
pub struct TxQueue<const N: usize> {
    buffer: [u8; N],
    head: usize,
    tail: usize,
}

impl<const N: usize> TxQueue<N> {
    pub const fn new() -> Self {
        Self {
            buffer: [0; N],
            head: 0,
            tail: 0,
        }
    }

    /// Append one byte, silently dropping it if the queue is full.
    pub fn push(&mut self, byte: u8) {
        let next = (self.head + 1) % N;
        if next != self.tail {
            self.buffer[self.head] = byte;
            self.head = next;
        }
    }

    /// Queue every byte of `bytes` in order via `push`.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(byte);
        }
    }

    pub fn pop(&mut self) -> Option<u8> {
        if self.tail == self.head {
            return None;
        }
        let byte = self.buffer[self.tail];
        self.tail = (self.tail + 1) % N;
        Some(byte)
    }

    /// Move at most one byte to the transport. Called on every control-loop
    /// iteration; the only code path that touches the transport.
    pub fn drain_step<T: SerialTx>(&mut self, port: &mut T) {
        if port.ready_to_send() {
            if let Some(byte) = self.pop() {
                port.send_byte(byte);
            }
        }
    }

    pub fn len(&self) -> usize {
        (self.head + N - self.tail) % N
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Transport fake that records sent bytes and can be throttled.
    pub(crate) struct FakePort {
        pub ready: bool,
        pub sent: Vec<u8>,
    }

    impl FakePort {
        pub fn new() -> Self {
            Self {
                ready: true,
                sent: Vec::new(),
            }
        }
    }

    impl SerialTx for FakePort {
        fn ready_to_send(&self) -> bool {
            self.ready
        }

        fn send_byte(&mut self, byte: u8) {
            self.sent.push(byte);
        }
    }

    #[test]
    fn fifo_order() {
        let mut q: TxQueue<16> = TxQueue::new();
        q.write_bytes(b"abcde");
        assert_eq!(q.len(), 5);
        for &expect in b"abcde" {
            assert_eq!(q.pop(), Some(expect));
        }
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn full_queue_drops_pushes() {
        let mut q: TxQueue<8> = TxQueue::new();
        for byte in 0..20u8 {
            q.push(byte);
        }
        // One slot stays free to disambiguate empty from full.
        assert_eq!(q.len(), 7);
        for expect in 0..7u8 {
            assert_eq!(q.pop(), Some(expect));
        }
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn drain_step_moves_at_most_one_byte() {
        let mut q: TxQueue<16> = TxQueue::new();
        let mut port = FakePort::new();
        q.write_bytes(b"xy");

        q.drain_step(&mut port);
        assert_eq!(port.sent, b"x");

        port.ready = false;
        q.drain_step(&mut port);
        assert_eq!(port.sent, b"x");

        port.ready = true;
        q.drain_step(&mut port);
        q.drain_step(&mut port);
        assert_eq!(port.sent, b"xy");
    }

    #[test]
    fn wraps_across_the_storage_boundary() {
        let mut q: TxQueue<4> = TxQueue::new();
        for round in 0..10u8 {
            q.push(round);
            q.push(round + 100);
            assert_eq!(q.pop(), Some(round));
            assert_eq!(q.pop(), Some(round + 100));
        }
        assert!(q.is_empty());
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity_and_preserves_order(pushes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut q: TxQueue<16> = TxQueue::new();
            for &byte in &pushes {
                q.push(byte);
                prop_assert!(q.len() <= 15);
            }
            // Everything that survived pops back out in push order.
            let kept = pushes.len().min(15);
            for &expect in &pushes[..kept] {
                prop_assert_eq!(q.pop(), Some(expect));
            }
            prop_assert_eq!(q.pop(), None);
        }
    }
}
