//! Property tests for the line ring and refresh policy

use lcdterm_core::console::Console;
use lcdterm_core::line::{Append, LineBuffer};
use lcdterm_core::ring::RingState;
use proptest::prelude::*;

const N: usize = 5;
const M: usize = 8;

/// Printable line contents, one byte per character
fn line_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0x20u8..0x7F, 0..=M)
}

fn feed_lines(console: &mut Console<N, M>, lines: &[Vec<u8>]) {
    for text in lines {
        console.feed_all(text);
        console.feed(b'\n');
    }
}

fn planned_lines(console: &mut Console<N, M>) -> (bool, Vec<Vec<u8>>) {
    let plan = console.plan_redraw();
    let lines = plan
        .indices()
        .map(|slot| console.ring().slot(slot).unwrap().as_bytes().to_vec())
        .collect();
    (plan.clear, lines)
}

proptest! {
    #[test]
    fn fewer_than_n_lines_never_fill(lines in prop::collection::vec(line_text(), 0..N)) {
        let mut console: Console<N, M> = Console::new();
        feed_lines(&mut console, &lines);

        prop_assert_ne!(console.ring().state(), RingState::Full);
        let (clear, drawn) = planned_lines(&mut console);
        prop_assert!(!clear);
        prop_assert_eq!(drawn, lines);
    }

    #[test]
    fn exactly_n_lines_fill_in_order(lines in prop::collection::vec(line_text(), N)) {
        let mut console: Console<N, M> = Console::new();
        feed_lines(&mut console, &lines);

        prop_assert_eq!(console.ring().state(), RingState::Full);
        let (clear, drawn) = planned_lines(&mut console);
        prop_assert!(!clear);
        prop_assert_eq!(drawn, lines);
    }

    #[test]
    fn extra_lines_evict_oldest(lines in prop::collection::vec(line_text(), N + 1..4 * N)) {
        let mut console: Console<N, M> = Console::new();
        feed_lines(&mut console, &lines[..N]);
        planned_lines(&mut console);

        for (k, text) in lines[N..].iter().enumerate() {
            feed_lines(&mut console, core::slice::from_ref(text));
            prop_assert_eq!(console.ring().len(), N);

            let (clear, drawn) = planned_lines(&mut console);
            prop_assert!(clear);
            prop_assert_eq!(&drawn[..], &lines[k + 1..k + 1 + N]);
        }
    }

    #[test]
    fn cursors_stay_in_range(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut console: Console<N, M> = Console::new();
        for b in bytes {
            console.feed(b);
            prop_assert!(console.ring().read_cursor() < N);
            prop_assert!(console.ring().write_cursor() < N);
            prop_assert!(console.ring().len() <= N);
            prop_assert!(console.line_buffer().position() <= M);
        }
    }

    #[test]
    fn long_lines_keep_first_m(text in prop::collection::vec(0x20u8..=0xFF, 0..3 * M)) {
        let mut buffer: LineBuffer<M> = LineBuffer::new();
        for (k, &ch) in text.iter().enumerate() {
            let expected = if k < M { Append::Stored } else { Append::Truncated };
            prop_assert_eq!(buffer.append(ch), expected);
        }
        let keep = text.len().min(M);
        let line = buffer.finalize();
        prop_assert_eq!(line.as_bytes(), &text[..keep]);
    }

    #[test]
    fn reset_twice_equals_reset_once(bytes in prop::collection::vec(any::<u8>(), 0..100)) {
        let mut once: Console<N, M> = Console::new();
        let mut twice: Console<N, M> = Console::new();
        for &b in &bytes {
            once.feed(b);
            twice.feed(b);
        }
        once.reset();
        twice.reset();
        twice.reset();

        prop_assert_eq!(once.ring().state(), RingState::Empty);
        prop_assert_eq!(twice.ring().state(), RingState::Empty);
        prop_assert_eq!(once.ring().write_cursor(), twice.ring().write_cursor());
        prop_assert_eq!(once.ring().read_cursor(), twice.ring().read_cursor());
        prop_assert_eq!(once.line_buffer().position(), twice.line_buffer().position());
        prop_assert_eq!(planned_lines(&mut once), planned_lines(&mut twice));
    }
}
